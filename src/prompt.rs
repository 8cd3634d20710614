//! Text prompt asking for a cover letter.
//!
//! The prompt is plain text: a fixed instruction line followed by one
//! `# Heading` section per input, joined with `\n`. Missing inputs render as
//! empty sections so the layout never changes.

use std::fmt;

use crate::models::{Company, Experience, Job, Template};

pub const INSTRUCTION: &str = "I am applying for a job at a company. Please give me a cover letter based on the company, job description, my personal experience and generate something similar to the template.";

/// The inputs of one cover-letter prompt.
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    pub company: &'a Company,
    pub job: &'a Job,
    pub experiences: &'a [Experience],
    pub template: Option<&'a Template>,
}

impl<'a> Prompt<'a> {
    pub fn new(
        company: &'a Company,
        job: &'a Job,
        experiences: &'a [Experience],
        template: Option<&'a Template>,
    ) -> Self {
        Self {
            company,
            job,
            experiences,
            template,
        }
    }

    /// Render the prompt for `job` at `company`.
    pub fn build(
        company: &Company,
        job: &Job,
        experiences: &[Experience],
        template: Option<&Template>,
    ) -> String {
        Prompt::new(company, job, experiences, template).to_string()
    }
}

impl fmt::Display for Prompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let experiences = self
            .experiences
            .iter()
            .map(|experience| experience.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let template = self.template.map_or("", |template| template.content.as_str());
        let company_name = format!("# Company Name: {}", self.company.name);
        let job_title = format!("# Job Title: {}", self.job.title);

        let lines: [&str; 15] = [
            INSTRUCTION,
            &company_name,
            "# Company Description:",
            &self.company.description,
            "",
            &job_title,
            "",
            "# Job Description:",
            &self.job.description,
            "",
            "# Selected Experiences:",
            &experiences,
            "",
            "# Template:",
            template,
        ];
        f.write_str(&lines.join("\n"))
    }
}
