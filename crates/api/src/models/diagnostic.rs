use super::inspection::InspectionId;
use crate::error::{ApiError, ApiResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open byte range into the analyzed source text.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn empty_at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_range(&self, other: TextRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Smallest range covering both.
    pub fn cover(&self, other: TextRange) -> TextRange {
        TextRange::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn slice<'s>(&self, source: &'s str) -> ApiResult<&'s str> {
        source.get(self.start..self.end).ok_or(ApiError::InvalidRange {
            start: self.start,
            end: self.end,
            len: source.len(),
        })
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    WeakWarning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::WeakWarning => f.write_str("weak warning"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FixKind {
    InsertText,
    ReplaceText,
}

/// A single textual rewrite offered alongside a diagnostic.
///
/// For `InsertText` the anchor is an empty range at the insertion offset;
/// for `ReplaceText` it is the range being replaced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct Fix {
    pub family_name: String,
    pub kind: FixKind,
    pub anchor: TextRange,
    pub text: String,
}

impl Fix {
    pub fn insert(family_name: impl Into<String>, offset: usize, text: impl Into<String>) -> Self {
        Self {
            family_name: family_name.into(),
            kind: FixKind::InsertText,
            anchor: TextRange::empty_at(offset),
            text: text.into(),
        }
    }

    pub fn replace(
        family_name: impl Into<String>,
        range: TextRange,
        text: impl Into<String>,
    ) -> Self {
        Self {
            family_name: family_name.into(),
            kind: FixKind::ReplaceText,
            anchor: range,
            text: text.into(),
        }
    }

    /// Returns `source` with this edit applied.
    pub fn apply(&self, source: &str) -> ApiResult<String> {
        let anchor = match self.kind {
            FixKind::InsertText => TextRange::empty_at(self.anchor.start),
            FixKind::ReplaceText => self.anchor,
        };
        if anchor.start > anchor.end
            || !source.is_char_boundary(anchor.start)
            || !source.is_char_boundary(anchor.end)
        {
            return Err(ApiError::InvalidRange {
                start: anchor.start,
                end: anchor.end,
                len: source.len(),
            });
        }

        let mut out = String::with_capacity(source.len() + self.text.len());
        out.push_str(&source[..anchor.start]);
        out.push_str(&self.text);
        out.push_str(&source[anchor.end..]);
        Ok(out)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct Diagnostic {
    pub inspection: InspectionId,
    pub range: TextRange,
    pub message: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn new(
        inspection: InspectionId,
        range: TextRange,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            inspection,
            range,
            message: message.into(),
            severity,
            fix: None,
        }
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} (at byte range {})",
            self.severity, self.inspection, self.message, self.range
        )
    }
}
