// src/conversation.rs

use crate::errors::RoutineResult;
use crate::models::{Message, Role};
use crate::selection::SelectedProducts;
use serde::Serialize;

/// Append-only history sent in full with every completion request.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Seeds the system turn. It is never removed.
    pub fn new(system_prompt: &str) -> Self {
        Self {
            messages: vec![Message::new(Role::System, system_prompt)],
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::new(Role::User, content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::new(Role::Assistant, content));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[derive(Serialize)]
struct RoutineProduct<'a> {
    name: &'a str,
    brand: &'a str,
    category: &'a str,
    description: &'a str,
}

/// Builds the user turn describing the selected products.
pub fn routine_request(selected: &SelectedProducts) -> RoutineResult<String> {
    let products: Vec<RoutineProduct<'_>> = selected
        .iter()
        .map(|p| RoutineProduct {
            name: &p.name,
            brand: &p.brand,
            category: &p.category,
            description: &p.description,
        })
        .collect();

    Ok(format!(
        "Here are the selected products: {}",
        serde_json::to_string(&products)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    #[test]
    fn test_transcript_starts_with_system_turn() {
        let transcript = Transcript::new("be helpful");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].role, Role::System);
        assert_eq!(transcript.messages()[0].content, "be helpful");
    }

    #[test]
    fn test_transcript_appends_in_order() {
        let mut transcript = Transcript::new("sys");
        transcript.push_user("hello");
        transcript.push_assistant("hi there");

        let roles: Vec<_> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant]);
    }

    #[test]
    fn test_routine_request_omits_image() {
        let mut selected = SelectedProducts::new();
        selected.toggle(&Product {
            name: "Micellar Water".to_string(),
            brand: "Garnier".to_string(),
            category: "cleanser".to_string(),
            description: "Gentle makeup remover".to_string(),
            image: "https://example.com/micellar.png".to_string(),
        });

        let request = routine_request(&selected).unwrap();
        assert_eq!(
            request,
            "Here are the selected products: [{\"name\":\"Micellar Water\",\"brand\":\"Garnier\",\
             \"category\":\"cleanser\",\"description\":\"Gentle makeup remover\"}]"
        );
    }
}
