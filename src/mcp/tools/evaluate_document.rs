//! Tool definition for the documentation globalization review tool.

use serde::Deserialize;
use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "evaluate_document";

/// Arguments accepted by the tool.
#[derive(Debug, Deserialize)]
pub struct EvaluateDocumentRequest {
    pub document: String,
}

/// Get the tool descriptor for MCP tools/list.
pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Describes how to evaluate given documentation.\n\n",
            "General Guideline:\n",
            "The original version of technical documentation is written in the source ",
            "language. The source documentation contains adequate and correct information ",
            "for readers to understand and the information stays correct and unambiguous ",
            "when translated to the target language.\n\n",
            "Review Steps:\n",
            "1. Read the whole documentation and summarize it. Save the summary for the report.\n",
            "2. Read the documentation sentence by sentence. For each sentence:\n",
            "   - Evaluate whether the sentence has common issues. Save the issue descriptions.\n",
            "   - Translate the sentence to the target language and evaluate whether the ",
            "translated sentence has common issues. Save the issue descriptions.\n",
            "3. Summarize all feedback and report.",
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "document": {
                "type": "string",
                "description": "The documentation content to be evaluated."
            }
        },
        "required": ["document"]
    })
}
