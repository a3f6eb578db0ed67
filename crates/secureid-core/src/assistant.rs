//! Rule-based assistant replies
//!
//! A reply is picked by the first topic whose trigger phrases appear in the
//! lowercased message. There is no ranking and no external call.

/// First message of every chat session.
pub const GREETING: &str = "Hello! I'm your SecureID assistant. How can I help you with your decentralized identity today?";

const PRODUCT_REPLY: &str = "SecureID is a blockchain-based identity solution that allows you to create, manage, and verify your digital identity credentials without relying on centralized authorities. Your data is stored securely on blockchain and you control who can access it.";

const VERIFICATION_REPLY: &str = "To verify your identity, you need to add credentials to your profile. You can do this by clicking on 'Add New Credential' in your identity dashboard. In a real-world scenario, trusted authorities would verify these credentials.";

const CREDENTIAL_REPLY: &str = "Credentials are verifiable claims about your identity, like a digital version of your ID card, diploma, or license. You can add these to your identity profile, and they can be verified by authorities without revealing all your personal information.";

const THANKS_REPLY: &str = "You're welcome! If you have any other questions about your decentralized identity, feel free to ask.";

const FALLBACK_REPLY: &str = "I'm sorry, I don't have specific information about that. As a simple demo assistant, my knowledge about SecureID is limited. For more complex questions, please refer to our documentation or contact support.";

/// Topic a user message was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTopic {
    Product,
    Verification,
    Credentials,
    Thanks,
    Fallback,
}

/// Topics in match order with their trigger phrases (lowercase).
const RULES: &[(ReplyTopic, &[&str])] = &[
    (ReplyTopic::Product, &["what is", "how does"]),
    (ReplyTopic::Verification, &["verify", "verification"]),
    (ReplyTopic::Credentials, &["credential"]),
    (ReplyTopic::Thanks, &["thank"]),
];

impl ReplyTopic {
    /// Canned reply text for this topic.
    pub fn reply(self) -> &'static str {
        match self {
            ReplyTopic::Product => PRODUCT_REPLY,
            ReplyTopic::Verification => VERIFICATION_REPLY,
            ReplyTopic::Credentials => CREDENTIAL_REPLY,
            ReplyTopic::Thanks => THANKS_REPLY,
            ReplyTopic::Fallback => FALLBACK_REPLY,
        }
    }
}

/// Classify a message by case-insensitive substring match.
pub fn classify(message: &str) -> ReplyTopic {
    let lowered = message.to_lowercase();
    RULES
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|p| lowered.contains(p)))
        .map(|(topic, _)| *topic)
        .unwrap_or(ReplyTopic::Fallback)
}

/// Reply the assistant gives to `message`.
pub fn canned_reply(message: &str) -> &'static str {
    classify(message).reply()
}
