use crate::prompts::{
    BASE_PROMPT, project_files_prompt,
    templates::{NODE_TEMPLATE, REACT_TEMPLATE},
};
use serde::Serialize;
use std::fmt;

/// Starter project kinds the classifier can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stack {
    Node,
    React,
}

/// Prompts handed back to the client for a chosen stack. `prompts` seed the
/// model conversation, `ui_prompts` are shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateBundle {
    pub prompts: Vec<String>,
    #[serde(rename = "uiPrompts")]
    pub ui_prompts: Vec<String>,
}

impl Stack {
    /// Parses the classifier's answer. Anything other than the bare words
    /// `node` or `react` (ignoring case and surrounding whitespace) is rejected.
    pub fn from_model_reply(reply: &str) -> Option<Self> {
        match reply.trim().to_ascii_lowercase().as_str() {
            "node" => Some(Self::Node),
            "react" => Some(Self::React),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::React => "react",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            Self::Node => NODE_TEMPLATE,
            Self::React => REACT_TEMPLATE,
        }
    }

    pub fn bundle(&self) -> TemplateBundle {
        let template = self.template();
        let prompts = match self {
            // Only the front-end starter gets the design guidance block.
            Self::React => vec![BASE_PROMPT.to_string(), project_files_prompt(template)],
            Self::Node => vec![project_files_prompt(template)],
        };

        TemplateBundle {
            prompts,
            ui_prompts: vec![template.to_string()],
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
