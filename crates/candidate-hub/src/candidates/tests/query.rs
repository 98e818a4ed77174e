use super::common::*;

use crate::candidates::domain::{Candidate, Gender, Qualification, Skill};
use crate::candidates::query::{
    filter_candidates, search_candidates, CandidateQuery, ExperienceRange, FilterParams,
    FilterSpec,
};

fn roster() -> Vec<Candidate> {
    vec![
        candidate(
            1,
            "John Thompson",
            Qualification::BachelorOfArts,
            2,
            &[Skill::Angular],
            Gender::Male,
        ),
        candidate(
            2,
            "Sarah Johnson",
            Qualification::MasterOfCommerce,
            1,
            &[Skill::Html],
            Gender::Female,
        ),
        candidate(
            3,
            "Michael Chen",
            Qualification::BachelorOfScience,
            3,
            &[Skill::React, Skill::JavaScript],
            Gender::Male,
        ),
        candidate(
            4,
            "Emily Davis",
            Qualification::MasterOfBusinessAdministration,
            4,
            &[Skill::Vue, Skill::Css],
            Gender::Female,
        ),
    ]
}

fn skills(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

fn with_veterans() -> Vec<Candidate> {
    let mut roster = roster();
    roster.push(candidate(
        5,
        "Ravi Kumar",
        Qualification::MasterOfCommerce,
        20,
        &[Skill::Angular],
        Gender::Male,
    ));
    roster.push(candidate(
        6,
        "Grace Hopper",
        Qualification::BachelorOfScience,
        50,
        &[Skill::TypeScript],
        Gender::Female,
    ));
    roster
}

#[test]
fn empty_search_and_default_filter_is_identity() {
    let roster = with_veterans();
    assert_eq!(filter_candidates(&roster, "", &FilterSpec::default()), roster);
    assert_eq!(CandidateQuery::default().apply(&roster), roster);
    assert_eq!(search_candidates(&roster, ""), roster);
}

#[test]
fn explicit_range_still_excludes_veterans() {
    let roster = with_veterans();
    let ui_default = FilterSpec {
        experience: Some(ExperienceRange::default()),
        ..FilterSpec::default()
    };
    assert_eq!(ids(&filter_candidates(&roster, "", &ui_default)), vec![1, 2, 3, 4]);

    let top_end = FilterSpec {
        experience: Some(ExperienceRange { min: 20, max: 50 }),
        ..FilterSpec::default()
    };
    assert_eq!(ids(&filter_candidates(&roster, "", &top_end)), vec![5, 6]);
}

#[test]
fn search_is_case_insensitive_substring_over_name_email_phone() {
    let roster = roster();
    assert_eq!(ids(&search_candidates(&roster, "jo")), vec![1, 2]);
    assert_eq!(ids(&search_candidates(&roster, "EMILY.DAVIS@")), vec![4]);
    assert_eq!(ids(&search_candidates(&roster, "010 0003")), vec![3]);
    assert!(search_candidates(&roster, "zz").is_empty());
}

#[test]
fn skills_filter_is_a_disjunction() {
    let roster = roster();
    let filter = FilterSpec {
        skills: skills(&["React", "Vue"]),
        ..FilterSpec::default()
    };
    assert_eq!(ids(&filter_candidates(&roster, "", &filter)), vec![3, 4]);

    let react_only = FilterSpec {
        skills: skills(&["React"]),
        ..FilterSpec::default()
    };
    assert!(!ids(&filter_candidates(&roster, "", &react_only)).contains(&2));
}

#[test]
fn dimensions_are_conjunctive() {
    let roster = roster();
    let filter = FilterSpec {
        qualification: Some("Master of Business Administration (MBA)".to_string()),
        experience: Some(ExperienceRange { min: 4, max: 10 }),
        skills: skills(&["CSS", "Angular"]),
        gender: Some("Female".to_string()),
    };
    assert_eq!(ids(&filter_candidates(&roster, "", &filter)), vec![4]);

    let wrong_gender = FilterSpec {
        gender: Some("Male".to_string()),
        ..filter.clone()
    };
    assert!(filter_candidates(&roster, "", &wrong_gender).is_empty());

    let narrowed_by_search = filter_candidates(&roster, "sarah", &filter);
    assert!(narrowed_by_search.is_empty());
}

#[test]
fn all_sentinel_leaves_dimension_unconstrained() {
    let roster = roster();
    let filter = FilterSpec {
        qualification: Some("all".to_string()),
        gender: Some(String::new()),
        ..FilterSpec::default()
    };
    assert_eq!(filter_candidates(&roster, "", &filter), roster);
}

#[test]
fn nonsensical_values_yield_empty_results() {
    let roster = roster();
    let inverted = FilterSpec {
        experience: Some(ExperienceRange { min: 5, max: 2 }),
        ..FilterSpec::default()
    };
    assert!(filter_candidates(&roster, "", &inverted).is_empty());

    let unknown_label = FilterSpec {
        qualification: Some("Doctor of Philosophy (PhD)".to_string()),
        ..FilterSpec::default()
    };
    assert!(filter_candidates(&roster, "", &unknown_label).is_empty());
}

#[test]
fn output_keeps_input_order() {
    let mut roster = roster();
    roster.reverse();
    let filter = FilterSpec {
        experience: Some(ExperienceRange { min: 2, max: 4 }),
        ..FilterSpec::default()
    };
    assert_eq!(ids(&filter_candidates(&roster, "", &filter)), vec![4, 3, 1]);
}

#[test]
fn seeded_sample_scenario() {
    let store = sample_store();
    let candidates = store.list();

    let angular = FilterSpec {
        skills: skills(&["Angular"]),
        ..FilterSpec::default()
    };
    assert_eq!(ids(&filter_candidates(&candidates, "", &angular)), vec![1]);

    let seasoned = FilterSpec {
        experience: Some(ExperienceRange { min: 2, max: 10 }),
        ..FilterSpec::default()
    };
    assert!(filter_candidates(&candidates, "", &seasoned).is_empty());

    assert_eq!(ids(&search_candidates(&candidates, "john")), vec![2]);
}

#[test]
fn params_fall_back_to_default_range() {
    let params = FilterParams {
        min_experience: Some("lots".to_string()),
        max_experience: None,
        skills: Some("React, ,Vue,".to_string()),
        ..FilterParams::default()
    };
    let spec = FilterSpec::from_params(&params);
    assert_eq!(spec.experience, Some(ExperienceRange::default()));
    assert_eq!(spec.skills, skills(&["React", "Vue"]));
}

#[test]
fn empty_skills_param_is_unconstrained() {
    let params = FilterParams {
        skills: Some(String::new()),
        ..FilterParams::default()
    };
    let spec = FilterSpec::from_params(&params);
    assert!(spec.skills.is_empty());
    assert_eq!(filter_candidates(&roster(), "", &spec).len(), 4);
}

#[test]
fn combined_query_applies_search_then_filters() {
    let params = FilterParams {
        q: Some("SON".to_string()),
        gender: Some("Female".to_string()),
        ..FilterParams::default()
    };
    let query = CandidateQuery::from(&params);
    assert_eq!(ids(&query.apply(&roster())), vec![2]);
}

#[test]
fn filter_params_always_apply_the_default_range() {
    let spec = FilterSpec::from_params(&FilterParams::default());
    assert_eq!(spec.experience, Some(ExperienceRange::default()));
    assert_eq!(ids(&filter_candidates(&with_veterans(), "", &spec)), vec![1, 2, 3, 4]);
}

#[test]
fn combined_query_without_bounds_keeps_every_experience_level() {
    let query = CandidateQuery::from(&FilterParams::default());
    assert_eq!(query.filter.experience, None);
    assert_eq!(query.apply(&with_veterans()).len(), 6);

    let bounded = CandidateQuery::from(&FilterParams {
        min_experience: Some("15".to_string()),
        ..FilterParams::default()
    });
    assert_eq!(
        bounded.filter.experience,
        Some(ExperienceRange { min: 15, max: 10 })
    );
}

#[test]
fn repeated_params_keep_the_first_value() {
    let params = FilterParams::from_pairs(vec![
        ("q".to_string(), "sarah".to_string()),
        ("q".to_string(), "michael".to_string()),
        ("unknown".to_string(), "ignored".to_string()),
        ("minExperience".to_string(), "1".to_string()),
    ]);
    assert_eq!(params.q.as_deref(), Some("sarah"));
    assert_eq!(params.min_experience.as_deref(), Some("1"));
    assert_eq!(params.max_experience, None);
}
