//! Presentation containers: metric cards and progress bars.
//!
//! Pure formatting over pre-computed values. Nothing here touches the
//! layout engine; the only "computation" is a clamp and a couple of
//! lookup tables mapping named colors to style tokens.

use crate::data::Color;

/// Direction of a metric's change since the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeDirection {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl ChangeDirection {
    /// Color token for rendering the change figure.
    pub fn color(self) -> &'static str {
        match self {
            ChangeDirection::Positive => "#4ade80",
            ChangeDirection::Negative => "#f87171",
            ChangeDirection::Neutral => "#94a3b8",
        }
    }

    /// Sign prefix shown before the change figure.
    pub fn prefix(self) -> &'static str {
        match self {
            ChangeDirection::Positive => "+",
            _ => "",
        }
    }
}

/// Named accent color of a metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccentColor {
    #[default]
    Blue,
    Purple,
    Green,
    Yellow,
    Red,
    Gray,
}

/// Style tokens for an accent: gradient endpoints plus a text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentStyle {
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
    pub text: &'static str,
}

impl AccentColor {
    pub fn style(self) -> AccentStyle {
        match self {
            AccentColor::Blue => AccentStyle {
                gradient_from: "#3b82f6",
                gradient_to: "#06b6d4",
                text: "#60a5fa",
            },
            AccentColor::Purple => AccentStyle {
                gradient_from: "#a855f7",
                gradient_to: "#ec4899",
                text: "#c084fc",
            },
            AccentColor::Green => AccentStyle {
                gradient_from: "#22c55e",
                gradient_to: "#10b981",
                text: "#4ade80",
            },
            AccentColor::Yellow => AccentStyle {
                gradient_from: "#eab308",
                gradient_to: "#f97316",
                text: "#facc15",
            },
            AccentColor::Red => AccentStyle {
                gradient_from: "#ef4444",
                gradient_to: "#ec4899",
                text: "#f87171",
            },
            AccentColor::Gray => AccentStyle {
                gradient_from: "#6b7280",
                gradient_to: "#64748b",
                text: "#9ca3af",
            },
        }
    }
}

/// A dashboard metric card: pre-formatted strings plus style lookups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub subtitle: Option<String>,
    /// Pre-formatted change figure, e.g. `"12"` or `"3.4"`.
    pub change: Option<String>,
    pub change_direction: ChangeDirection,
    pub accent: AccentColor,
}

impl MetricCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_change(mut self, change: impl Into<String>, direction: ChangeDirection) -> Self {
        self.change = Some(change.into());
        self.change_direction = direction;
        self
    }

    pub fn with_accent(mut self, accent: AccentColor) -> Self {
        self.accent = accent;
        self
    }

    /// The change figure with its sign prefix, e.g. `"+12"`.
    pub fn change_display(&self) -> Option<String> {
        self.change
            .as_ref()
            .map(|change| format!("{}{change}", self.change_direction.prefix()))
    }
}

/// A horizontal progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    pub value: f64,
    pub max: f64,
    pub label: Option<String>,
    pub color: Color,
}

impl ProgressBar {
    pub fn new(value: f64, max: f64) -> Self {
        Self {
            value,
            max,
            label: None,
            color: Color::from("#8b5cf6"),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Fill percentage, clamped to `[0, 100]`. A non-positive maximum
    /// yields zero rather than dividing by it.
    pub fn percentage(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.value / self.max * 100.0).clamp(0.0, 100.0)
    }

    /// Percentage formatted at one decimal place, e.g. `"62.5%"`.
    pub fn display_percentage(&self) -> String {
        format!("{:.1}%", self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_proportional() {
        assert_eq!(ProgressBar::new(25.0, 100.0).percentage(), 25.0);
        assert_eq!(ProgressBar::new(5.0, 8.0).percentage(), 62.5);
    }

    #[test]
    fn percentage_clamps_both_ends() {
        assert_eq!(ProgressBar::new(150.0, 100.0).percentage(), 100.0);
        assert_eq!(ProgressBar::new(-10.0, 100.0).percentage(), 0.0);
    }

    #[test]
    fn non_positive_max_yields_zero() {
        assert_eq!(ProgressBar::new(5.0, 0.0).percentage(), 0.0);
        assert_eq!(ProgressBar::new(5.0, -1.0).percentage(), 0.0);
    }

    #[test]
    fn display_percentage_has_one_decimal() {
        assert_eq!(ProgressBar::new(5.0, 8.0).display_percentage(), "62.5%");
        assert_eq!(ProgressBar::new(1.0, 3.0).display_percentage(), "33.3%");
    }

    #[test]
    fn change_direction_colors() {
        assert_eq!(ChangeDirection::Positive.color(), "#4ade80");
        assert_eq!(ChangeDirection::Negative.color(), "#f87171");
        assert_eq!(ChangeDirection::Neutral.color(), "#94a3b8");
    }

    #[test]
    fn positive_change_gets_plus_prefix() {
        let card = MetricCard::new("Open grievances", "128")
            .with_change("12", ChangeDirection::Positive);
        assert_eq!(card.change_display().as_deref(), Some("+12"));

        let card = MetricCard::new("Resolved", "90").with_change("3", ChangeDirection::Negative);
        assert_eq!(card.change_display().as_deref(), Some("3"));
    }

    #[test]
    fn accent_lookup_is_total() {
        for accent in [
            AccentColor::Blue,
            AccentColor::Purple,
            AccentColor::Green,
            AccentColor::Yellow,
            AccentColor::Red,
            AccentColor::Gray,
        ] {
            assert!(accent.style().gradient_from.starts_with('#'));
        }
    }
}
