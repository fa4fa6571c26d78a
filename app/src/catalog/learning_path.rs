use super::{SecondaryPhase, Step};

// (title, subtitle, description, folder, tag), in learning order.
const STEPS: [(&str, &str, &str, &str, Option<&str>); 10] = [
    (
        "Foundation",
        "Basic LLM Interaction",
        "Your first step: loading models, basic prompts, understanding tokens.",
        "01_intro",
        None,
    ),
    (
        "Optional",
        "OpenAI APIs",
        "Cloud-based models, API keys, message roles, statelessness.",
        "02_openai-intro",
        Some("Optional"),
    ),
    (
        "Specialization",
        "System Prompts",
        "Transform general LLMs into specialized agents with system prompts.",
        "03_translation",
        None,
    ),
    (
        "Reasoning",
        "Reasoning Agents",
        "Teaching AI to think logically and solve complex problems.",
        "04_think",
        None,
    ),
    (
        "Performance",
        "Parallel Processing",
        "Process multiple requests simultaneously for better performance.",
        "05_batch",
        None,
    ),
    (
        "UX",
        "Streaming & Control",
        "Real-time responses and controlled output for better user experience.",
        "06_coding",
        None,
    ),
    (
        "Function Calling",
        "Tools",
        "Transform LLMs from text generators into agents that can act.",
        "07_simple-agent",
        Some("Key concept"),
    ),
    (
        "State",
        "Persistent Memory",
        "Transform agents from stateless responders into systems with context.",
        "08_simple-agent-with-memory",
        None,
    ),
    (
        "ReAct Pattern",
        "Reasoning + Acting",
        "Reasoning + Acting = powerful problem-solving agents.",
        "09_react-agent",
        Some("Advanced"),
    ),
    (
        "Atom of Thought",
        "AoT Planning",
        "\"SQL for Reasoning\" \u{2014} structured, executable plans.",
        "10_aot-agent",
        Some("Expert"),
    ),
];

pub(super) fn steps() -> Vec<Step> {
    (1u32..)
        .zip(STEPS)
        .map(|(number, (title, subtitle, description, folder, tag))| Step {
            id: number,
            number,
            title: String::from(title),
            subtitle: String::from(subtitle),
            description: String::from(description),
            folder: String::from(folder),
            tag: tag.map(String::from),
        })
        .collect()
}

pub(super) fn secondary_phase() -> SecondaryPhase {
    SecondaryPhase {
        title: String::from("Phase 2"),
        subtitle: String::from("Building a Production Framework"),
        description: String::from(
            "Learn to rebuild LangChain's core patterns with clear, educational code. \
             Runnable, chains, tools, agents, and state machines.",
        ),
        path: String::from("tutorial"),
    }
}
