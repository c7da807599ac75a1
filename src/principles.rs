// Prompt-engineering guidance shown alongside the generated prompts

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principle {
    pub id: &'static str,
    pub guidance: &'static str,
}

pub const GENERAL_PRINCIPLES: [Principle; 8] = [
    Principle {
        id: "clarity",
        guidance: "Use clear, specific language avoiding vague terms",
    },
    Principle {
        id: "context",
        guidance: "Provide relevant background information",
    },
    Principle {
        id: "rolePlay",
        guidance: "Assign specific persona or expertise to AI",
    },
    Principle {
        id: "outputFormat",
        guidance: "Specify desired response format",
    },
    Principle {
        id: "constraints",
        guidance: "Define limitations and exclusions",
    },
    Principle {
        id: "examples",
        guidance: "Provide input-output examples when needed",
    },
    Principle {
        id: "iteration",
        guidance: "Be prepared to refine based on results",
    },
    Principle {
        id: "breakdown",
        guidance: "Divide complex tasks into manageable steps",
    },
];

pub const CHAIN_OF_THOUGHT: &str = "Think step by step and explain your reasoning";
pub const ITERATIVE_IMPROVEMENT: &str = "Draft, critique, and improve based on feedback";

pub fn principle(id: &str) -> Option<&'static Principle> {
    GENERAL_PRINCIPLES.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(
            principle("breakdown").map(|p| p.guidance),
            Some("Divide complex tasks into manageable steps")
        );
        assert!(principle("unknown").is_none());
    }
}
