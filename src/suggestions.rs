use crate::types::Section;

pub fn suggestion_for(section: Section) -> Option<&'static str> {
    let text = match section {
        Section::Title => "Add a clear # H1 title at the top - this is the first thing users see",
        Section::Tagline => {
            "Add a bold **tagline** below the title describing your project in one line"
        }
        Section::QuickStart => {
            "Add a ## Quick Start section with installation commands (npm install, pip install, etc.)"
        }
        Section::Documentation => {
            "Add a ## Documentation section linking to docs, wiki, or API reference"
        }
        Section::License => "Add a ## License section - common choices: MIT, Apache 2.0, GPL",
        Section::Contributors => {
            "Add a ## Contributing section explaining how others can contribute"
        }
        Section::Badge => "Add badges for build status, version, license, etc. (shields.io)",
        Section::TableOfContents => {
            "Add a ## Table of Contents for READMEs longer than 3 sections"
        }
        Section::WhatAndWhy => {
            "Add a ## What & Why section explaining the problem your project solves"
        }
        Section::VisualPreview => "Add a ## Visual Preview section with screenshots or GIFs",
        Section::ProblemStatement => {
            "Add **The Problem:** to clearly state the issue you're solving"
        }
        Section::SolutionStatement => {
            "Add **Our Solution:** to explain how your project addresses the problem"
        }
        Section::CodeBlock => "Add code examples using triple backticks to show usage",
        Section::Image => "Add images or screenshots to make your README more engaging",
        Section::WikiLink => "Link to your GitHub wiki for detailed documentation",
        Section::LicenseLink => {
            "Add a link to your LICENSE file (e.g., [MIT License](LICENSE))"
        }
        Section::HtmlComment | Section::DeleteInstruction => return None,
    };
    Some(text)
}

pub fn removal_hint_for(section: Section) -> Option<&'static str> {
    match section {
        Section::HtmlComment => Some("Remove leftover <!-- template comments -->"),
        Section::DeleteInstruction => {
            Some("Remove > **DELETE:** template instructions before publishing")
        }
        _ => None,
    }
}
