use leptos::prelude::*;

use crate::catalog::Step;
use crate::components::{Bullets, Checklist, Footer, Header, SITE_NAME};
use crate::context::use_links;

const PILLS: [&str; 4] = [
    "Local LLMs",
    "Function Calling",
    "ReAct Patterns",
    "No Black Boxes",
];

const CORE_CONCEPTS: &[&str] = &[
    "How LLMs work at a fundamental level",
    "What agents really are (LLM + tools + patterns)",
    "How different agent architectures function",
    "Why frameworks make the design choices they do",
];

const PRACTICAL_SKILLS: &[&str] = &[
    "Building agents with local LLMs",
    "Implementing function calling and tools",
    "Managing memory and state",
    "Creating ReAct and AoT agents",
];

const KEY_CONCEPTS: [(&str, &[&str]); 3] = [
    (
        "LLM Fundamentals",
        &["Stateless processing", "Tokens", "Context windows", "System prompts"],
    ),
    (
        "Function Calling",
        &["Tools", "Tool definitions", "Agent decision-making", "Action-taking"],
    ),
    (
        "Agent Patterns",
        &["ReAct", "AoT", "Memory management", "Reasoning loops"],
    ),
];

const KNOWLEDGE_REQUIRED: &[&str] = &[
    "Basic JavaScript/Node.js",
    "Understanding of async/await",
    "Command line basics",
    "File system operations",
];

const SYSTEM_REQUIREMENTS: &[&str] = &[
    "Node.js 18+ installed",
    "8GB+ RAM (16GB recommended)",
    "A downloaded model file (.gguf)",
    "About 2\u{2013}4GB disk space per model",
];

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <Header />
        <main class="home">
            <Hero />
            <WhatYoullLearn />
            <Philosophy />
            <LearningPath />
            <KeyConcepts />
            <Prerequisites />
            <CallToAction />
            <Footer />
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>{SITE_NAME}</h1>
            <p class="tagline">"Learn to build AI agents locally without frameworks"</p>
            <p class="lead">
                "Understand what happens under the hood before using production frameworks. "
                "Build real understanding of function calling, memory, and ReAct patterns."
            </p>
            <div class="pills">
                {PILLS.into_iter().map(|label| view! { <span class="pill">{label}</span> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn WhatYoullLearn() -> impl IntoView {
    view! {
        <section class="what-you-will-learn">
            <h2>"What You'll Learn"</h2>
            <p class="section-lead">"Master the fundamentals of AI agents through hands-on examples"</p>
            <div class="grid grid-2">
                <div class="card">
                    <h3>"Core Concepts"</h3>
                    <Bullets items=CORE_CONCEPTS />
                </div>
                <div class="card">
                    <h3>"Practical Skills"</h3>
                    <Bullets items=PRACTICAL_SKILLS />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Philosophy() -> impl IntoView {
    view! {
        <section class="philosophy">
            <h2>"Philosophy: Learn by Building"</h2>
            <p>
                "This tutorial teaches you to build AI agents from first principles using "
                <strong>"local LLMs"</strong>
                " and "
                <strong>"node-llama-cpp"</strong>
                ". By working through these examples, you'll understand deeply, then use frameworks wisely."
            </p>
        </section>
    }
}

#[component]
fn LearningPath() -> impl IntoView {
    let links = use_links();
    let catalog = links.catalog();
    let steps = catalog
        .steps()
        .iter()
        .map(|step| {
            let href = links.example_url(&step.folder);
            view! { <StepCard step=step.clone() href=href /> }
        })
        .collect_view();
    let phase = catalog.secondary_phase().clone();
    let phase_href = links.secondary_phase_url();

    view! {
        <section class="learning-path">
            <h2>"Learning Path"</h2>
            <p class="section-lead">"Follow these tutorials in order. Each example builds on the previous one."</p>
            <div class="steps">
                {steps}
                <a class="step step-next" href=phase_href target="_blank" rel="noopener noreferrer">
                    <span class="step-number">"2"</span>
                    <div class="step-body">
                        <span class="step-title">{phase.title}</span>
                        <p class="step-subtitle">{phase.subtitle}</p>
                        <p class="step-description">{phase.description}</p>
                    </div>
                    <span class="step-arrow">{"\u{2192}"}</span>
                </a>
            </div>
        </section>
    }
}

#[component]
fn StepCard(step: Step, href: String) -> impl IntoView {
    let Step {
        number,
        title,
        subtitle,
        description,
        tag,
        ..
    } = step;

    view! {
        <a class="step" href=href target="_blank" rel="noopener noreferrer">
            <span class="step-number">{number}</span>
            <div class="step-body">
                <div class="step-heading">
                    <span class="step-title">{title}</span>
                    {tag.map(|tag| view! { <span class="step-tag">{tag}</span> })}
                </div>
                <p class="step-subtitle">{subtitle}</p>
                <p class="step-description">{description}</p>
            </div>
            <span class="step-arrow">{"\u{2192}"}</span>
        </a>
    }
}

#[component]
fn KeyConcepts() -> impl IntoView {
    view! {
        <section class="key-concepts">
            <h2>"Key Concepts You'll Master"</h2>
            <p class="section-lead">"Essential building blocks for understanding and building AI agents"</p>
            <div class="grid grid-3">
                {KEY_CONCEPTS
                    .into_iter()
                    .map(|(title, items)| {
                        view! {
                            <div class="card">
                                <h3>{title}</h3>
                                <ul class="plain">
                                    {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Prerequisites() -> impl IntoView {
    view! {
        <section class="prerequisites">
            <h2>"Prerequisites"</h2>
            <p class="section-lead">"Before you begin, make sure you have the following ready"</p>
            <div class="grid grid-2">
                <div class="card">
                    <h3>"Knowledge Required"</h3>
                    <Checklist items=KNOWLEDGE_REQUIRED />
                </div>
                <div class="card">
                    <h3>"System Requirements"</h3>
                    <Checklist items=SYSTEM_REQUIREMENTS />
                </div>
            </div>
            <p class="note">
                "Don't worry if you're new to some concepts \u{2014} we'll explain everything step by step."
            </p>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    let links = use_links();
    let repo_url = links.repo_url().to_string();
    let first_lesson = links.lesson_url(1).unwrap_or_else(|error| {
        log::warn!("Could not link the first lesson: {}", error);
        repo_url.clone()
    });

    view! {
        <section class="call-to-action">
            <h2>"Ready to Start Learning?"</h2>
            <p>
                "Begin with Lesson 1 to understand basic LLM interaction, then progress through each "
                "tutorial step by step."
            </p>
            <div class="actions">
                <a class="button button-primary" href=first_lesson target="_blank" rel="noopener noreferrer">
                    "Start with Lesson 1"
                </a>
                <a class="button button-outline" href=repo_url target="_blank" rel="noopener noreferrer">
                    "Open on GitHub"
                </a>
            </div>
        </section>
    }
}
