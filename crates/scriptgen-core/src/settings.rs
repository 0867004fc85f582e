//! Generation preferences: the five knobs next to the topic.
//!
//! Each enumerated setting carries a display label (what the model sees in
//! the prompt) and a slug (what the command line accepts). Parsing accepts
//! either, case-insensitively.

use std::{fmt, str::FromStr};

use crate::error::{Result, ScriptgenError};

pub trait Setting: Copy + Sized + 'static {
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
    fn slug(&self) -> &'static str;
}

fn parse_setting<T: Setting>(input: &str) -> Result<T> {
    let needle = input.trim();
    T::ALL
        .iter()
        .copied()
        .find(|s| s.slug().eq_ignore_ascii_case(needle) || s.label().eq_ignore_ascii_case(needle))
        .ok_or_else(|| ScriptgenError::UnknownSetting {
            kind: T::KIND,
            value: input.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoDuration {
    #[default]
    Short,
    Medium,
    Long,
}

impl Setting for VideoDuration {
    const KIND: &'static str = "duration";
    const ALL: &'static [Self] = &[Self::Short, Self::Medium, Self::Long];

    fn label(&self) -> &'static str {
        match self {
            VideoDuration::Short => "Short (5-10 mins)",
            VideoDuration::Medium => "Medium (10-20 mins)",
            VideoDuration::Long => "Long (20+ mins)",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            VideoDuration::Short => "short",
            VideoDuration::Medium => "medium",
            VideoDuration::Long => "long",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Professional,
    Casual,
    Humorous,
    Educational,
    Inspirational,
    Energetic,
}

impl Setting for Mood {
    const KIND: &'static str = "mood";
    const ALL: &'static [Self] = &[
        Self::Professional,
        Self::Casual,
        Self::Humorous,
        Self::Educational,
        Self::Inspirational,
        Self::Energetic,
    ];

    fn label(&self) -> &'static str {
        match self {
            Mood::Professional => "Professional",
            Mood::Casual => "Casual",
            Mood::Humorous => "Humorous",
            Mood::Educational => "Educational",
            Mood::Inspirational => "Inspirational",
            Mood::Energetic => "Energetic",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Mood::Professional => "professional",
            Mood::Casual => "casual",
            Mood::Humorous => "humorous",
            Mood::Educational => "educational",
            Mood::Inspirational => "inspirational",
            Mood::Energetic => "energetic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Formal,
    Conversational,
    Storytelling,
    NewsReport,
    Tutorial,
}

impl Setting for Tone {
    const KIND: &'static str = "tone";
    const ALL: &'static [Self] = &[
        Self::Formal,
        Self::Conversational,
        Self::Storytelling,
        Self::NewsReport,
        Self::Tutorial,
    ];

    fn label(&self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Conversational => "Conversational",
            Tone::Storytelling => "Storytelling",
            Tone::NewsReport => "News Report",
            Tone::Tutorial => "Tutorial",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Conversational => "conversational",
            Tone::Storytelling => "storytelling",
            Tone::NewsReport => "news-report",
            Tone::Tutorial => "tutorial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Audience {
    #[default]
    Beginners,
    Intermediate,
    Experts,
    GeneralPublic,
    Kids,
    Professionals,
}

impl Setting for Audience {
    const KIND: &'static str = "audience";
    const ALL: &'static [Self] = &[
        Self::Beginners,
        Self::Intermediate,
        Self::Experts,
        Self::GeneralPublic,
        Self::Kids,
        Self::Professionals,
    ];

    fn label(&self) -> &'static str {
        match self {
            Audience::Beginners => "Beginners",
            Audience::Intermediate => "Intermediate Users",
            Audience::Experts => "Advanced/Experts",
            Audience::GeneralPublic => "General Public",
            Audience::Kids => "Kids",
            Audience::Professionals => "Professionals",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Audience::Beginners => "beginners",
            Audience::Intermediate => "intermediate",
            Audience::Experts => "experts",
            Audience::GeneralPublic => "general-public",
            Audience::Kids => "kids",
            Audience::Professionals => "professionals",
        }
    }
}

macro_rules! impl_display_and_parse {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = ScriptgenError;

                fn from_str(s: &str) -> Result<Self> {
                    parse_setting(s)
                }
            }
        )+
    };
}

impl_display_and_parse!(VideoDuration, Mood, Tone, Audience);

/// Sampling temperature handed to the model, constrained to `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Creativity(f32);

impl Creativity {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 1.0;

    pub fn new(value: f32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ScriptgenError::InvalidCreativity { value });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Creativity {
    fn default() -> Self {
        Self(0.7)
    }
}

impl fmt::Display for Creativity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Creativity {
    type Err = ScriptgenError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<f32>()
            .map_err(|_| ScriptgenError::UnknownSetting {
                kind: "creativity level",
                value: s.to_string(),
            })?;
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScriptSettings {
    pub duration: VideoDuration,
    pub mood: Mood,
    pub tone: Tone,
    pub audience: Audience,
    pub creativity: Creativity,
}
