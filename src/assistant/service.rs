use super::stack::{Stack, TemplateBundle};
use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenAiClient},
    prompts::{CLASSIFIER_INSTRUCTION, WORK_DIR, system_prompt},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Front door for both routes. Holds the one completion client for the
/// process; it carries no per-request state so it is shared without locking.
pub struct Assistant {
    llm_client: Arc<dyn LlmClient>,
    classifier_max_tokens: u32,
    chat_max_tokens: u32,
    system_prompt: String,
}

impl Assistant {
    pub fn new(llm_config: LlmConfig) -> Self {
        let classifier_max_tokens = llm_config.classifier_max_tokens;
        let chat_max_tokens = llm_config.chat_max_tokens;
        info!(
            "Initializing assistant with provider '{}' and model '{}'",
            llm_config.provider, llm_config.model
        );

        Self {
            llm_client: Arc::new(OpenAiClient::new(llm_config)),
            classifier_max_tokens,
            chat_max_tokens,
            system_prompt: system_prompt(WORK_DIR),
        }
    }

    /// Builds an assistant around an existing client, keeping the token
    /// budgets from `llm_config`.
    pub fn with_client(llm_client: Arc<dyn LlmClient>, llm_config: &LlmConfig) -> Self {
        Self {
            llm_client,
            classifier_max_tokens: llm_config.classifier_max_tokens,
            chat_max_tokens: llm_config.chat_max_tokens,
            system_prompt: system_prompt(WORK_DIR),
        }
    }

    pub async fn classify(&self, prompt: &str) -> Result<Stack> {
        let request = ChatCompletionRequest {
            messages: vec![
                ChatMessage::system(CLASSIFIER_INSTRUCTION),
                ChatMessage::user(prompt),
            ],
            max_tokens: Some(self.classifier_max_tokens),
        };

        let response = self.llm_client.create_chat_completion(request).await?;
        let answer = response.first_content().unwrap_or_default();

        match Stack::from_model_reply(answer) {
            Some(stack) => {
                info!("Classified project as {}", stack);
                Ok(stack)
            }
            None => Err(Error::UnexpectedModelReply(answer.to_string())),
        }
    }

    pub async fn template(&self, prompt: &str) -> Result<TemplateBundle> {
        let stack = self.classify(prompt).await?;
        Ok(stack.bundle())
    }

    /// Forwards a conversation with the system prompt in front and returns the
    /// first reply untouched.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let mut forwarded = Vec::with_capacity(messages.len() + 1);
        forwarded.push(ChatMessage::system(self.system_prompt.clone()));
        forwarded.extend(messages);

        let request = ChatCompletionRequest {
            messages: forwarded,
            max_tokens: Some(self.chat_max_tokens),
        };

        let response = self.llm_client.create_chat_completion(request).await?;
        debug!(
            "Chat completion {} from {} (usage: {:?})",
            response.id, response.model, response.usage
        );

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::llm("Chat completion returned no choices"))?;

        Ok(choice.message.content)
    }
}
