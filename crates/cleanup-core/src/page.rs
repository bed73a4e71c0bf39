//! The page markup contract.
//!
//! A `Page` lists which regions and controls the rendered site provides.
//! Every component checks for its own regions when the page loads and
//! stays inactive if any of them is missing. Controls default to present
//! when a region is described in a page file, so a file only has to spell
//! out what it leaves out.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PageError;
use crate::models::{builtin_points, builtin_questions, MapPoint, QuizQuestion};

fn present() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub theme_toggle: bool,
    pub events: Option<EventsRegion>,
    pub quiz: Option<QuizRegion>,
    pub map: Option<MapRegion>,
    pub report: Option<ReportRegion>,
    pub pledge: Option<PledgeRegion>,
}

/// Event list container and its type filter control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsRegion {
    #[serde(default = "present")]
    pub list: bool,
    #[serde(default = "present")]
    pub filter: bool,
}

/// Quiz container with its question groups, submit control and result line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRegion {
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    #[serde(default = "present")]
    pub submit: bool,
    #[serde(default = "present")]
    pub result: bool,
}

/// Map point controls and the info region they update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRegion {
    #[serde(default)]
    pub points: Vec<MapPoint>,
    #[serde(default = "present")]
    pub info: bool,
}

/// Report form (location and description inputs) and the reported list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRegion {
    #[serde(default = "present")]
    pub list: bool,
}

/// Pledge form, its confirmation region and the optional modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PledgeRegion {
    /// Interest checkbox values, in document order
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default = "present")]
    pub confirmation: bool,
    #[serde(default)]
    pub modal: Option<ModalRegion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalRegion {
    #[serde(default = "present")]
    pub message: bool,
    #[serde(default = "present")]
    pub close: bool,
}

impl Page {
    /// The campaign site with every region present.
    pub fn builtin() -> Self {
        Self {
            theme_toggle: true,
            events: Some(EventsRegion {
                list: true,
                filter: true,
            }),
            quiz: Some(QuizRegion {
                questions: builtin_questions(),
                submit: true,
                result: true,
            }),
            map: Some(MapRegion {
                points: builtin_points(),
                info: true,
            }),
            report: Some(ReportRegion { list: true }),
            pledge: Some(PledgeRegion {
                interests: vec![
                    "Waterway cleanups".to_string(),
                    "Park cleanups".to_string(),
                    "Trail cleanups".to_string(),
                    "Recycling education".to_string(),
                ],
                confirmation: true,
                modal: Some(ModalRegion {
                    message: true,
                    close: true,
                }),
            }),
        }
    }

    /// Load a page description from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PageError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| PageError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
