use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const YEAR_MIN: i32 = 2000;
pub const YEAR_MAX: i32 = 2100;
pub const DEFAULT_YEAR: i32 = 2025;
pub const DEFAULT_GPA_SCALE: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

/// Labels are matched case-insensitively after trimming.
fn match_label<T: Copy>(
    all: &[T],
    label: fn(&T) -> &'static str,
    kind: &'static str,
    raw: &str,
) -> Result<T, UnknownLabel> {
    let wanted = raw.trim().to_uppercase();
    all.iter()
        .copied()
        .find(|v| label(v) == wanted)
        .ok_or_else(|| UnknownLabel {
            kind,
            value: raw.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum DegreeType {
    Bs,
    Ba,
    Ms,
    Ma,
    Phd,
    Other,
}

impl DegreeType {
    pub const ALL: &'static [DegreeType] = &[
        DegreeType::Bs,
        DegreeType::Ba,
        DegreeType::Ms,
        DegreeType::Ma,
        DegreeType::Phd,
        DegreeType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DegreeType::Bs => "BS",
            DegreeType::Ba => "BA",
            DegreeType::Ms => "MS",
            DegreeType::Ma => "MA",
            DegreeType::Phd => "PHD",
            DegreeType::Other => "OTHER",
        }
    }
}

impl FromStr for DegreeType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_label(Self::ALL, Self::as_str, "degree type", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Term {
    Fall,
    #[default]
    Spring,
    Summer,
    Winter,
}

impl Term {
    pub const ALL: &'static [Term] = &[Term::Fall, Term::Spring, Term::Summer, Term::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Term::Fall => "FALL",
            Term::Spring => "SPRING",
            Term::Summer => "SUMMER",
            Term::Winter => "WINTER",
        }
    }
}

impl FromStr for Term {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_label(Self::ALL, Self::as_str, "term", s)
    }
}

/// Where an application stands. Stored as the label, spaces included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PostStatus {
    Applied,
    Applying,
    Accepted,
    AcceptedFromWaitlist,
    Rejected,
    RejectedFromWaitlist,
    Waitlisted,
    Interview,
    Enrolled,
    Question,
    Notes,
}

impl PostStatus {
    pub const ALL: &'static [PostStatus] = &[
        PostStatus::Applied,
        PostStatus::Applying,
        PostStatus::Accepted,
        PostStatus::AcceptedFromWaitlist,
        PostStatus::Rejected,
        PostStatus::RejectedFromWaitlist,
        PostStatus::Waitlisted,
        PostStatus::Interview,
        PostStatus::Enrolled,
        PostStatus::Question,
        PostStatus::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Applied => "APPLIED",
            PostStatus::Applying => "APPLYING",
            PostStatus::Accepted => "ACCEPTED",
            PostStatus::AcceptedFromWaitlist => "ACCEPTED FROM WAITLIST",
            PostStatus::Rejected => "REJECTED",
            PostStatus::RejectedFromWaitlist => "REJECTED FROM WAITLIST",
            PostStatus::Waitlisted => "WAITLISTED",
            PostStatus::Interview => "INTERVIEW",
            PostStatus::Enrolled => "ENROLLED",
            PostStatus::Question => "QUESTION",
            PostStatus::Notes => "NOTES",
        }
    }
}

impl FromStr for PostStatus {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_label(Self::ALL, Self::as_str, "status", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum StudentType {
    Domestic,
    International,
}

impl StudentType {
    pub const ALL: &'static [StudentType] = &[StudentType::Domestic, StudentType::International];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudentType::Domestic => "DOMESTIC",
            StudentType::International => "INTERNATIONAL",
        }
    }
}

impl FromStr for StudentType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_label(Self::ALL, Self::as_str, "student type", s)
    }
}

/// Two-letter continent code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Antarctica,
}

impl Continent {
    pub const ALL: &'static [Continent] = &[
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
        Continent::Antarctica,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Africa => "AF",
            Continent::Asia => "AS",
            Continent::Europe => "EU",
            Continent::NorthAmerica => "NA",
            Continent::SouthAmerica => "SA",
            Continent::Oceania => "OC",
            Continent::Antarctica => "AN",
        }
    }
}

impl FromStr for Continent {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_label(Self::ALL, Self::as_str, "continent", s)
    }
}

impl TryFrom<String> for DegreeType {
    type Error = UnknownLabel;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<DegreeType> for &'static str {
    fn from(value: DegreeType) -> Self {
        value.as_str()
    }
}

impl fmt::Display for DegreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Term {
    type Error = UnknownLabel;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<Term> for &'static str {
    fn from(value: Term) -> Self {
        value.as_str()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for PostStatus {
    type Error = UnknownLabel;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<PostStatus> for &'static str {
    fn from(value: PostStatus) -> Self {
        value.as_str()
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for StudentType {
    type Error = UnknownLabel;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<StudentType> for &'static str {
    fn from(value: StudentType) -> Self {
        value.as_str()
    }
}

impl fmt::Display for StudentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Continent {
    type Error = UnknownLabel;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<Continent> for &'static str {
    fn from(value: Continent) -> Self {
        value.as_str()
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
