//! Dashboard figures.
//!
//! Static display data for the progress overview. Nothing is computed from
//! live sessions.

use serde::{Deserialize, Serialize};

/// One headline indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    /// Trend versus the previous period ("+12%", "-20%", "+3").
    pub change: String,
}

/// Average score on one theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemePerformance {
    pub theme: String,
    /// Average score, in percent.
    pub score: u32,
    /// Quizzes taken on this theme.
    pub quizzes: u32,
}

/// Coarse color band for a theme score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerfBand {
    Strong,
    Fair,
    Weak,
}

impl ThemePerformance {
    pub fn band(&self) -> PerfBand {
        if self.score >= 80 {
            PerfBand::Strong
        } else if self.score >= 60 {
            PerfBand::Fair
        } else {
            PerfBand::Weak
        }
    }
}

/// Average score for one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyScore {
    pub month: String,
    /// Average score, in percent.
    pub score: u32,
}

fn kpi(label: &str, value: &str, change: &str) -> Kpi {
    Kpi {
        label: label.into(),
        value: value.into(),
        change: change.into(),
    }
}

/// The headline indicators.
pub fn kpis() -> Vec<Kpi> {
    vec![
        kpi("Quiz réalisés", "47", "+12%"),
        kpi("Score moyen", "78%", "+5%"),
        kpi("Temps moyen/quiz", "8 min", "-15%"),
        kpi("Taux réussite", "82%", "+8%"),
        kpi("Examens passés", "12", "+3"),
        kpi("Réussite examens", "75%", "+10%"),
        kpi("Tickets résolus", "156", "+24"),
        kpi("Temps moy. ticket", "45 min", "-20%"),
    ]
}

fn theme(theme: &str, score: u32, quizzes: u32) -> ThemePerformance {
    ThemePerformance {
        theme: theme.into(),
        score,
        quizzes,
    }
}

/// Average score per theme.
pub fn theme_performance() -> Vec<ThemePerformance> {
    vec![
        theme("Congés Payés", 92, 8),
        theme("RTT", 85, 6),
        theme("Astreintes", 78, 4),
        theme("TransGP", 65, 3),
        theme("Paramétrage GTA", 70, 5),
        theme("Heures supplémentaires", 88, 4),
        theme("Support client", 82, 6),
    ]
}

/// Month-over-month average score.
pub fn monthly_progress() -> Vec<MonthlyScore> {
    [
        ("Sept", 62),
        ("Oct", 68),
        ("Nov", 72),
        ("Déc", 75),
        ("Jan", 78),
        ("Fév", 82),
    ]
    .into_iter()
    .map(|(month, score)| MonthlyScore {
        month: month.into(),
        score,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_kpis() {
        assert_eq!(kpis().len(), 8);
    }

    #[test]
    fn bands_follow_the_thresholds() {
        assert_eq!(theme("x", 92, 1).band(), PerfBand::Strong);
        assert_eq!(theme("x", 80, 1).band(), PerfBand::Strong);
        assert_eq!(theme("x", 78, 1).band(), PerfBand::Fair);
        assert_eq!(theme("x", 60, 1).band(), PerfBand::Fair);
        assert_eq!(theme("x", 59, 1).band(), PerfBand::Weak);
    }

    #[test]
    fn monthly_series_is_chronological() {
        let series = monthly_progress();
        assert_eq!(series.len(), 6);
        assert_eq!(series.first().unwrap().month, "Sept");
        assert_eq!(series.last().unwrap().score, 82);
    }
}
