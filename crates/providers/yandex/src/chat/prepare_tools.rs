use crate::ai_sdk_types::v2 as v2t;

use crate::ai_sdk_providers_yandex::chat::api_types::{
    YandexTool, YandexToolChoice, YandexToolChoiceMode, YandexToolWrapper,
};

pub struct PreparedTools {
    pub tools: Vec<YandexToolWrapper>,
    pub tool_choice: YandexToolChoice,
    pub warnings: Vec<v2t::CallWarning>,
}

/// Convert unified tool declarations and the tool-choice policy to wire form.
///
/// Function tools carry their schema verbatim with `strict` always set;
/// provider-defined tools are dropped with a warning. An absent tool choice
/// maps to the dedicated "unspecified" mode, which is distinct from "auto".
pub fn prepare_tools(tools: &[v2t::Tool], tool_choice: &Option<v2t::ToolChoice>) -> PreparedTools {
    let mut warnings: Vec<v2t::CallWarning> = vec![];
    let converted: Vec<YandexToolWrapper> = tools
        .iter()
        .filter_map(|tool| match tool {
            v2t::Tool::Function(f) => Some(YandexToolWrapper {
                function: YandexTool {
                    name: f.name.clone(),
                    description: f.description.clone(),
                    parameters: f.input_schema.clone(),
                    strict: true,
                },
            }),
            v2t::Tool::Provider(p) => {
                warnings.push(v2t::CallWarning::UnsupportedTool {
                    tool_name: p.name.clone(),
                    details: Some("provider tools are not supported".into()),
                });
                None
            }
        })
        .collect();

    let tool_choice = match tool_choice {
        None => YandexToolChoice::Mode {
            mode: YandexToolChoiceMode::Unspecified,
        },
        Some(v2t::ToolChoice::Auto) => YandexToolChoice::Mode {
            mode: YandexToolChoiceMode::Auto,
        },
        Some(v2t::ToolChoice::None) => YandexToolChoice::Mode {
            mode: YandexToolChoiceMode::None,
        },
        Some(v2t::ToolChoice::Required) => YandexToolChoice::Mode {
            mode: YandexToolChoiceMode::Required,
        },
        Some(v2t::ToolChoice::Tool { name }) => YandexToolChoice::Function {
            function_name: name.clone(),
        },
    };

    PreparedTools {
        tools: converted,
        tool_choice,
        warnings,
    }
}
