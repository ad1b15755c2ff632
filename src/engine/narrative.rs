//! Fixed-template coaching report.
//!
//! Output is a pure function of the ranked impacts: the same recommendations
//! always render to the same text, byte for byte.

use crate::engine::impact::Impact;
use crate::engine::metrics::{
    PracticeFocus, NEGATIVE_SUMMARY_THRESHOLD, POSITIVE_SUMMARY_THRESHOLD,
};
use crate::engine::ranker::Recommendations;

pub const HEADER: &str = "## Game Performance Analysis";

pub const SUMMARY_POSITIVE: &str = "Overall, your team's statistics line up with winning performances. \
The strengths below outweigh the gaps, so focus practice on sharpening the few areas that still trail the benchmark.";

pub const SUMMARY_NEGATIVE: &str = "Overall, your team's statistics trail the profile of winning teams. \
The priorities below carry the largest estimated cost to win probability and are the best return on practice time.";

pub const SUMMARY_MIXED: &str = "Overall, your team's statistics are a mix of strengths and gaps \
that roughly balance out. Targeted work on the priorities below can tip close matches in your favor.";

const NO_PRIORITIES: &str = "No stat falls meaningfully below the winning-team benchmark.";
const NO_STRENGTHS: &str = "No stat sits meaningfully above the winning-team benchmark yet.";

const RESEARCH_FINDINGS: [&str; 4] = [
    "- Reception errors are among the strongest predictors of losing: each one reduces the odds of winning by about 18%.",
    "- Service aces raise win odds by about 25% each, making serving pressure the most valuable single skill.",
    "- Attack errors cost about 8% in win odds each, so efficient attacking matters more than attack volume.",
    "- Blocking and floor defense add smaller but steady gains: solo blocks about 12%, block assists about 6%, digs about 3% each.",
];

fn focus_lines(focus: PracticeFocus) -> &'static [&'static str] {
    match focus {
        PracticeFocus::Reception => &[
            "- Serve-receive reps against live, varied serves (float, topspin, short)",
            "- Passing platform and footwork drills to a fixed target zone",
            "- Communication calls for seams between passers",
        ],
        PracticeFocus::Serving => &[
            "- Target serving to zones 1, 5 and 6 under a point penalty for misses",
            "- Alternate float and jump serves to build an aggressive but consistent routine",
            "- Track ace-to-error ratio in every serving block",
        ],
        PracticeFocus::AttackVolume => &[
            "- Shot-selection drills: tip, roll shot and line versus cross",
            "- Transition attack reps that end rallies on the first swing",
            "- Setter-hitter timing work to raise kills per attempt",
        ],
        PracticeFocus::AttackErrors => &[
            "- Controlled hitting at 80% power to a called target",
            "- Reading the block and using the hands instead of swinging into the net or out",
            "- Out-of-system hitting with a keep-it-in-play rule",
        ],
        PracticeFocus::Defense => &[
            "- Defensive positioning and base-to-read drills",
            "- Pursuit and emergency-play reps (sprawl, pancake, run-through)",
            "- Coach-on-three digging with live reads of the hitter's arm",
        ],
        PracticeFocus::Blocking => &[
            "- Footwork for swing and crossover blocking",
            "- Hand positioning and penetration over the net",
            "- Reading the setter to close the double block on time",
        ],
    }
}

/// Summary sentence for the sum of all impacts.
pub fn summary_sentence(total_impact: f64) -> &'static str {
    if total_impact > POSITIVE_SUMMARY_THRESHOLD {
        SUMMARY_POSITIVE
    } else if total_impact < NEGATIVE_SUMMARY_THRESHOLD {
        SUMMARY_NEGATIVE
    } else {
        SUMMARY_MIXED
    }
}

/// `|1 - OR| * 100`: change in win odds per unit, as a percentage.
pub fn odds_ratio_percent(odds_ratio: f64) -> f64 {
    (1.0 - odds_ratio).abs() * 100.0
}

fn weakness_paragraph(rank: usize, item: &Impact) -> String {
    format!(
        "**{}. {}**\nYour team recorded {:.1} per match against a winning-team benchmark of {:.1}. \
This gap is associated with an estimated {:.1}% reduction in win probability. \
Each unit changes the odds of winning by {:.1}%.",
        rank,
        item.metric.label(),
        item.value,
        item.benchmark,
        item.impact.abs(),
        odds_ratio_percent(item.odds_ratio),
    )
}

fn strength_paragraph(item: &Impact) -> String {
    format!(
        "**{}**\nYour team recorded {:.1} per match against a winning-team benchmark of {:.1}, \
contributing an estimated {:.1}% increase in win probability. \
Each unit changes the odds of winning by {:.1}%.",
        item.metric.label(),
        item.value,
        item.benchmark,
        item.impact.abs(),
        odds_ratio_percent(item.odds_ratio),
    )
}

/// Render the full report.
///
/// `all_impacts_sorted` supplies the total for the summary sentence. The
/// practice-focus block follows the top weakness and is left out when there
/// is none, or when that metric has no drill template.
pub fn render(recs: &Recommendations) -> String {
    let total: f64 = recs.all_impacts_sorted.iter().map(|i| i.impact).sum();
    let mut lines: Vec<String> = vec![
        HEADER.to_string(),
        String::new(),
        "### Overall Assessment".to_string(),
        summary_sentence(total).to_string(),
        String::new(),
        "### Top Practice Priorities".to_string(),
    ];

    if recs.weaknesses.is_empty() {
        lines.push(NO_PRIORITIES.to_string());
        lines.push(String::new());
    } else {
        for (i, w) in recs.weaknesses.iter().enumerate() {
            lines.push(weakness_paragraph(i + 1, w));
            lines.push(String::new());
        }
    }

    lines.push("### Areas of Strength".to_string());
    if recs.strengths.is_empty() {
        lines.push(NO_STRENGTHS.to_string());
        lines.push(String::new());
    } else {
        for s in &recs.strengths {
            lines.push(strength_paragraph(s));
            lines.push(String::new());
        }
    }

    lines.push("### Key Research Findings".to_string());
    lines.extend(RESEARCH_FINDINGS.iter().map(|s| s.to_string()));

    if let Some(focus) = recs.weaknesses.first().and_then(|w| w.metric.spec().focus) {
        lines.push(String::new());
        lines.push("### Recommended Practice Focus".to_string());
        lines.extend(focus_lines(focus).iter().map(|s| s.to_string()));
    }

    lines.join("\n")
}
