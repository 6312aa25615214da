//! Score aggregation: per-section scores and the overall 0–100 score.

use crate::models::{SectionKind, SectionScore, SectionSignals, SectionStatus};

/// Base score for a section whose header was found.
const FOUND_BASE: u32 = 70;
/// Sections whose score gets the content-length bonus when found.
const CONTENT_BONUS_KINDS: [SectionKind; 3] = [
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skills,
];

/// Placeholder formatting score; no real layout analysis is performed yet.
pub const FORMATTING_SCORE: u32 = 85;

/// Component weights for the overall score. Job fit dominates; formatting is
/// a stub reserved for future layout analysis.
const WEIGHT_SECTIONS: f64 = 0.3;
const WEIGHT_JOB_MATCH: f64 = 0.4;
const WEIGHT_SKILLS_DENSITY: f64 = 0.2;
const WEIGHT_FORMATTING: f64 = 0.1;

/// Skill count at which the density score saturates.
const DENSITY_SATURATION: f64 = 15.0;

/// Scores the five scored section kinds: base 70 when found, plus a
/// content-length bonus for experience/education/skills (+20 when
/// `text_len / 10 > 100`, +10 when `> 50`), clamped to 100.
pub fn score_sections(signals: &SectionSignals, text_len: usize) -> Vec<SectionScore> {
    SectionKind::SCORED
        .iter()
        .map(|kind| {
            let found = signals.found(*kind);
            let mut score = if found { FOUND_BASE } else { 0 };

            if found && CONTENT_BONUS_KINDS.contains(kind) {
                let content_estimate = text_len / 10;
                if content_estimate > 100 {
                    score += 20;
                } else if content_estimate > 50 {
                    score += 10;
                }
            }

            let score = score.min(100);
            SectionScore {
                name: kind.title().to_string(),
                score,
                status: SectionStatus::from_score(score),
                found,
            }
        })
        .collect()
}

/// min(100, count / 15 × 100): breadth is rewarded but saturates.
fn skills_density_score(skills_count: usize) -> f64 {
    (skills_count as f64 / DENSITY_SATURATION * 100.0).min(100.0)
}

/// Weighted combination of the four components, truncated to an integer:
/// sections 0.3, job match 0.4, skill density 0.2, formatting 0.1.
pub fn compute_overall(
    section_scores: &[SectionScore],
    job_match_percentage: u32,
    skills_count: usize,
) -> u32 {
    let avg_section = if section_scores.is_empty() {
        0.0
    } else {
        section_scores.iter().map(|s| s.score as f64).sum::<f64>() / section_scores.len() as f64
    };

    let overall = avg_section * WEIGHT_SECTIONS
        + job_match_percentage as f64 * WEIGHT_JOB_MATCH
        + skills_density_score(skills_count) * WEIGHT_SKILLS_DENSITY
        + FORMATTING_SCORE as f64 * WEIGHT_FORMATTING;

    overall as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SectionSignal, SectionSignals};

    fn signals_with(found: &[SectionKind]) -> SectionSignals {
        SectionSignals::new(
            SectionKind::ALL
                .iter()
                .map(|kind| {
                    (
                        *kind,
                        SectionSignal {
                            found: found.contains(kind),
                            positions: if found.contains(kind) { vec![0] } else { vec![] },
                        },
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_missing_section_scores_zero_poor() {
        let scores = score_sections(&signals_with(&[]), 2000);
        assert!(scores.iter().all(|s| s.score == 0));
        assert!(scores.iter().all(|s| s.status == SectionStatus::Poor));
        assert!(scores.iter().all(|s| !s.found));
    }

    #[test]
    fn test_found_section_short_text_scores_base() {
        let scores = score_sections(&signals_with(&[SectionKind::Experience]), 400);
        let experience = &scores[0];
        assert_eq!(experience.name, "Experience");
        assert_eq!(experience.score, 70);
        assert_eq!(experience.status, SectionStatus::Good);
    }

    #[test]
    fn test_long_text_bonus_twenty() {
        // text_len/10 > 100 → +20 for the content-bonus kinds.
        let scores = score_sections(&signals_with(&[SectionKind::Skills]), 1500);
        let skills = scores.iter().find(|s| s.name == "Skills").unwrap();
        assert_eq!(skills.score, 90);
        assert_eq!(skills.status, SectionStatus::Excellent);
    }

    #[test]
    fn test_medium_text_bonus_ten() {
        // 50 < text_len/10 ≤ 100 → +10.
        let scores = score_sections(&signals_with(&[SectionKind::Education]), 800);
        let education = scores.iter().find(|s| s.name == "Education").unwrap();
        assert_eq!(education.score, 80);
    }

    #[test]
    fn test_no_bonus_for_projects_or_certifications() {
        let scores = score_sections(
            &signals_with(&[SectionKind::Projects, SectionKind::Certifications]),
            5000,
        );
        let projects = scores.iter().find(|s| s.name == "Projects").unwrap();
        let certs = scores.iter().find(|s| s.name == "Certifications").unwrap();
        assert_eq!(projects.score, 70);
        assert_eq!(certs.score, 70);
    }

    #[test]
    fn test_contact_is_detected_but_never_scored() {
        let scores = score_sections(&signals_with(&[SectionKind::Contact]), 2000);
        assert_eq!(scores.len(), 5);
        assert!(scores.iter().all(|s| s.name != "Contact"));
    }

    #[test]
    fn test_scores_stay_within_bounds() {
        let scores = score_sections(&signals_with(&SectionKind::ALL), 100_000);
        assert!(scores.iter().all(|s| s.score <= 100));
    }

    #[test]
    fn test_density_saturates_at_fifteen_skills() {
        assert_eq!(skills_density_score(0), 0.0);
        assert!((skills_density_score(15) - 100.0).abs() < f64::EPSILON);
        assert!((skills_density_score(40) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_weighted_combination() {
        // All sections at 70, match 50, 15 skills:
        // 70×0.3 + 50×0.4 + 100×0.2 + 85×0.1 = 21 + 20 + 20 + 8.5 = 69.5 → 69
        let scores = score_sections(&signals_with(&SectionKind::SCORED), 400);
        assert_eq!(compute_overall(&scores, 50, 15), 69);
    }

    #[test]
    fn test_overall_is_truncated() {
        // 0 sections found, match 0, 0 skills: 0 + 0 + 0 + 8.5 → 8
        let scores = score_sections(&signals_with(&[]), 400);
        assert_eq!(compute_overall(&scores, 0, 0), 8);
    }

    #[test]
    fn test_overall_bounded_by_100() {
        let scores = score_sections(&signals_with(&SectionKind::SCORED), 100_000);
        assert!(compute_overall(&scores, 100, 40) <= 100);
    }
}
