//! Job matching: extracted skills vs a target profile's skill lists.

use tracing::debug;

use crate::models::{JobMatchResult, JobProfile, Skill};

/// Advisory strings appended conditionally, in this order.
const REC_MISSING_REQUIRED: &str = "Focus on acquiring missing required skills";
const REC_LEARN_PREFERRED: &str = "Consider learning preferred skills to stand out";
const REC_ADD_SKILLS: &str = "Add more technical skills to your resume";

/// Below this many extracted skills the matcher recommends adding more.
const MIN_SKILL_COUNT: usize = 10;
/// Top-N cap on the missing-skills and strengths lists.
const TOP_N: usize = 5;

fn profile(id: &str, title: &str, required: &[&str], preferred: &[&str], weights: (f64, f64)) -> JobProfile {
    JobProfile {
        id: id.to_string(),
        title: title.to_string(),
        required_skills: required.iter().map(|s| s.to_string()).collect(),
        preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
        weight_required: weights.0,
        weight_preferred: weights.1,
    }
}

/// Built-in job profiles. An absent or unrecognized id silently resolves to
/// the fullstack default; an unknown id never fails the matcher.
pub fn builtin_profile(id: Option<&str>) -> JobProfile {
    match id {
        Some("frontend") => profile(
            "frontend",
            "Frontend Developer",
            &["javascript", "react", "html", "css"],
            &["typescript", "vue.js", "sass", "webpack"],
            (0.8, 0.2),
        ),
        Some("backend") => profile(
            "backend",
            "Backend Developer",
            &["python", "node.js", "sql", "api development"],
            &["django", "flask", "postgresql", "redis"],
            (0.8, 0.2),
        ),
        other => {
            if let Some(unknown) = other.filter(|id| *id != "fullstack") {
                debug!("unknown job profile '{unknown}', using fullstack default");
            }
            profile(
                "fullstack",
                "Full Stack Developer",
                &["javascript", "react", "node.js", "html", "css"],
                &["python", "typescript", "postgresql", "aws"],
                (0.7, 0.3),
            )
        }
    }
}

/// Computes the weighted match result per the scoring model:
/// `required% × weight_required + preferred% × weight_preferred`, truncated
/// to an integer. Membership is case-insensitive on skill names.
pub fn match_against_profile(skills: &[Skill], profile: &JobProfile) -> JobMatchResult {
    let resume_names: Vec<String> = skills.iter().map(|s| s.name.to_lowercase()).collect();
    let has = |skill: &str| resume_names.iter().any(|n| n == &skill.to_lowercase());

    let required_matches = profile.required_skills.iter().filter(|s| has(s)).count();
    let required_score = if profile.required_skills.is_empty() {
        0.0
    } else {
        required_matches as f64 / profile.required_skills.len() as f64 * 100.0
    };

    let preferred_matches = profile.preferred_skills.iter().filter(|s| has(s)).count();
    let preferred_score = if profile.preferred_skills.is_empty() {
        0.0
    } else {
        preferred_matches as f64 / profile.preferred_skills.len() as f64 * 100.0
    };

    let final_score =
        required_score * profile.weight_required + preferred_score * profile.weight_preferred;

    // Unmet skills in profile-definition order, required before preferred.
    let missing_skills: Vec<String> = profile
        .required_skills
        .iter()
        .chain(profile.preferred_skills.iter())
        .filter(|s| !has(s))
        .take(TOP_N)
        .cloned()
        .collect();

    // Profile-relevant extracted skills, in extraction order.
    let strengths: Vec<String> = skills
        .iter()
        .filter(|s| {
            let name = s.name.to_lowercase();
            profile
                .required_skills
                .iter()
                .chain(profile.preferred_skills.iter())
                .any(|p| p.to_lowercase() == name)
        })
        .take(TOP_N)
        .map(|s| s.name.clone())
        .collect();

    let mut recommendations = Vec::new();
    if required_matches < profile.required_skills.len() {
        recommendations.push(REC_MISSING_REQUIRED.to_string());
    }
    if preferred_matches < profile.preferred_skills.len() / 2 {
        recommendations.push(REC_LEARN_PREFERRED.to_string());
    }
    if skills.len() < MIN_SKILL_COUNT {
        recommendations.push(REC_ADD_SKILLS.to_string());
    }

    JobMatchResult {
        title: profile.title.clone(),
        match_percentage: final_score as u32,
        missing_skills,
        strengths,
        recommendations,
    }
}
