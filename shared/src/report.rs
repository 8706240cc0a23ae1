use crate::response::AnalysisResponse;
use serde::{Deserialize, Serialize};

pub const TAMPERED_RECOMMENDATION: &str = "This image shows signs of digital manipulation. Consider verifying its authenticity through additional means.";
pub const AUTHENTIC_RECOMMENDATION: &str =
    "No significant signs of tampering detected. The image appears to be authentic.";
pub const ELA_UNAVAILABLE: &str = "ELA visualization not available";

/// How `processing_time` from the service is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Values above 1 are taken as milliseconds, anything else as seconds.
    #[default]
    Auto,
    Seconds,
    Milliseconds,
}

impl TimeUnit {
    pub fn to_millis(self, value: f64) -> f64 {
        match self {
            TimeUnit::Auto if value > 1.0 => value,
            TimeUnit::Auto | TimeUnit::Seconds => value * 1000.0,
            TimeUnit::Milliseconds => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Tampered,
    Authentic,
}

impl Verdict {
    pub fn color(self) -> &'static str {
        match self {
            Verdict::Tampered => "var(--danger)",
            Verdict::Authentic => "var(--success)",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Verdict::Tampered => TAMPERED_RECOMMENDATION,
            Verdict::Authentic => AUTHENTIC_RECOMMENDATION,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Verdict::Tampered => "tampered",
            Verdict::Authentic => "authentic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElaPreview {
    /// Inline data URI returned in `ela_image`.
    Inline(String),
    /// Path or URL returned in `ela_path`.
    Linked(String),
    Unavailable,
}

impl ElaPreview {
    pub fn source(&self) -> Option<&str> {
        match self {
            ElaPreview::Inline(src) | ElaPreview::Linked(src) => Some(src),
            ElaPreview::Unavailable => None,
        }
    }
}

/// Display-ready form of one analysis response.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub status: String,
    pub verdict: Verdict,
    pub confidence_percent: f64,
    pub confidence_text: String,
    pub processing_time_text: String,
    pub ela: ElaPreview,
}

impl AnalysisReport {
    pub fn from_response(response: &AnalysisResponse, unit: TimeUnit) -> Self {
        let raw_status = response
            .prediction
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or("Unknown");
        let status = capitalize_first(raw_status);

        let verdict = if status.to_lowercase() == "tampered" {
            Verdict::Tampered
        } else {
            Verdict::Authentic
        };

        let confidence_percent = response.confidence.map_or(0.0, |c| c * 100.0);
        let millis = response.processing_time.map_or(0.0, |t| unit.to_millis(t));

        let ela = match (non_empty(&response.ela_image), non_empty(&response.ela_path)) {
            (Some(image), _) => ElaPreview::Inline(image.to_string()),
            (None, Some(path)) => ElaPreview::Linked(path.to_string()),
            (None, None) => ElaPreview::Unavailable,
        };

        Self {
            status,
            verdict,
            confidence_percent,
            confidence_text: format!("{}%", to_fixed(confidence_percent, 2)),
            processing_time_text: format!("{} ms", to_fixed(millis, 2)),
            ela,
        }
    }

    pub fn status_color(&self) -> &'static str {
        self.verdict.color()
    }

    pub fn recommendation(&self) -> &'static str {
        self.verdict.recommendation()
    }

    /// Width for the confidence meter, clamped so bad values cannot overflow it.
    pub fn meter_width(&self) -> f64 {
        self.confidence_percent.clamp(0.0, 100.0)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Renders `value` with `digits` decimals the way JavaScript's `toFixed` does:
/// the exact binary value is rounded, and an exact tie rounds away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // No finite f64 needs more than 1074 fractional digits to be written exactly.
    let exact = format!("{:.1074}", value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let (kept, dropped) = frac_part.split_at(digits.min(frac_part.len()));

    let mut number: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
    if dropped.as_bytes().first().is_some_and(|d| *d >= b'5') {
        round_up(&mut number);
    }
    let (int_digits, frac_digits) = number.split_at(number.len() - kept.len());

    let mut text = String::with_capacity(number.len() + 2);
    if value < 0.0 {
        text.push('-');
    }
    text.extend(int_digits.iter().map(|&d| char::from(d)));
    if !frac_digits.is_empty() {
        text.push('.');
        text.extend(frac_digits.iter().map(|&d| char::from(d)));
    }
    text
}

fn round_up(number: &mut Vec<u8>) {
    for digit in number.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    number.insert(0, b'1');
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
