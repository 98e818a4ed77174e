use candidate_hub::candidates::{
    Candidate, CandidateQuery, ExperienceRange, FilterSpec, SeedProfile,
};
use candidate_hub::error::AppError;
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct PreviewArgs {
    /// Data set to load into the store before querying
    #[arg(long, default_value_t = SeedProfile::Showcase)]
    pub(crate) seed: SeedProfile,
    /// Case-insensitive text matched against name, email, and phone
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Exact qualification label ("all" for any)
    #[arg(long)]
    pub(crate) qualification: Option<String>,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) min_experience: i64,
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub(crate) max_experience: i64,
    /// Comma separated skills; a candidate matches when it has any of them
    #[arg(long, value_delimiter = ',')]
    pub(crate) skills: Vec<String>,
    /// Exact gender label ("all" for any)
    #[arg(long)]
    pub(crate) gender: Option<String>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub(crate) pretty: bool,
}

impl PreviewArgs {
    fn query(&self) -> CandidateQuery {
        CandidateQuery {
            search: self.search.clone().unwrap_or_default(),
            filter: FilterSpec {
                qualification: self.qualification.clone(),
                experience: Some(ExperienceRange {
                    min: self.min_experience,
                    max: self.max_experience,
                }),
                skills: self.skills.clone(),
                gender: self.gender.clone(),
            },
        }
    }
}

pub(crate) fn preview_matches(args: &PreviewArgs) -> Result<Vec<Candidate>, AppError> {
    let store = args.seed.build_store()?;
    Ok(args.query().apply(&store.list()))
}

pub(crate) fn run_preview(args: PreviewArgs) -> Result<(), AppError> {
    let matches = preview_matches(&args)?;
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&matches)?
    } else {
        serde_json::to_string(&matches)?
    };

    println!("{rendered}");
    eprintln!("{} candidate(s) matched ({} seed)", matches.len(), args.seed);
    Ok(())
}
