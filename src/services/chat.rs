use crate::services::ai::{ChatMessage, LlmProvider};

const SYSTEM_INSTRUCTION: &str = "You are the Nexora Care Assistant, a helpful guide on \
intellectual and developmental disabilities (IDD), care strategies, and support resources. \
Answer warmly and practically, keep answers short, and remind users that qualified \
professionals from the directory should be consulted for personalized guidance. Never give \
a diagnosis.";

pub fn system_prompt(context: &str) -> String {
    format!("{SYSTEM_INSTRUCTION}\n\nConversation context: {context}")
}

/// Produces the assistant reply for one turn. The collaborator is stateless;
/// the caller resends the full transcript every time. With no provider
/// configured, answers come from the canned keyword table instead.
pub async fn respond(
    llm: Option<&dyn LlmProvider>,
    message: &str,
    context: &str,
    history: &[ChatMessage],
) -> anyhow::Result<String> {
    let Some(llm) = llm else {
        return Ok(fallback_reply(message));
    };

    let mut messages = history.to_vec();
    messages.push(ChatMessage {
        role: "user".to_string(),
        content: message.to_string(),
    });

    llm.chat(&system_prompt(context), &messages).await
}

/// Canned answers used when no LLM is configured (development mode).
pub fn fallback_reply(question: &str) -> String {
    let q = question.to_lowercase();

    if q.contains("early signs") || q.contains("developmental delay") {
        return "Early signs of developmental delays can include: delayed speech or language \
                skills, difficulty with motor skills, challenges with social interaction, \
                repetitive behaviors, and delays in cognitive milestones. It's important to \
                consult with a pediatrician or developmental specialist if you notice these \
                signs. Early intervention services can make a significant difference."
            .to_string();
    }
    if q.contains("communication") || q.contains("speech") {
        return "For communication difficulties, consider: using visual supports like picture \
                cards or communication boards, practicing simple sign language, reading \
                together daily, giving extra time for responses, and working with a \
                speech-language pathologist."
            .to_string();
    }
    if q.contains("iep") || q.contains("school") {
        return "For IEP meetings, prepare by: reviewing your child's current progress, \
                listing specific concerns and goals, bringing any recent evaluations or \
                reports, and preparing questions about services and accommodations. You are \
                an equal member of the IEP team."
            .to_string();
    }
    if q.contains("behavior") || q.contains("challenging") {
        return "Behavioral strategies include: identifying triggers and patterns, using \
                positive reinforcement, creating structured routines, teaching coping \
                skills, and working with a behavior analyst if needed. Consistency across \
                environments is key."
            .to_string();
    }

    "Thank you for your question about IDD care. While I'd love to provide specific \
     guidance, I recommend consulting with qualified healthcare professionals for \
     personalized advice. You can browse our directory of verified professionals or \
     schedule a consultation through our platform."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_matches_keywords() {
        assert!(fallback_reply("What are the early signs of delays?")
            .contains("Early signs of developmental delays"));
        assert!(fallback_reply("My child struggles with communication")
            .contains("speech-language pathologist"));
        assert!(fallback_reply("How do I prepare for an IEP meeting?").contains("IEP"));
        assert!(fallback_reply("Managing challenging behavior").contains("positive reinforcement"));
    }

    #[test]
    fn test_fallback_default() {
        let reply = fallback_reply("Something unrelated");
        assert!(reply.contains("directory of verified professionals"));
    }

    #[test]
    fn test_system_prompt_includes_context() {
        let prompt = system_prompt("IDD care and support");
        assert!(prompt.contains("Nexora Care Assistant"));
        assert!(prompt.ends_with("Conversation context: IDD care and support"));
    }

    #[tokio::test]
    async fn test_respond_without_provider_uses_fallback() {
        let reply = respond(None, "hello there", "IDD care and support", &[])
            .await
            .unwrap();
        assert!(reply.contains("qualified healthcare professionals"));
    }
}
