// Prompt constants and builders for the generation pipeline.
// Templates are fixed; builders only substitute the request fields, so the
// same inputs always yield the same prompt text.

/// Résumé tailoring prompt template.
/// Replace: {job_title}, {job_description}, {company_info}, {base_resume}
const RESUME_PROMPT_TEMPLATE: &str = r#"TASK: Tailor this resume for a {job_title} position.
Return the output in **Markdown format** with headings, bold text, and bullet points.

JOB DESCRIPTION:
{job_description}

COMPANY INFORMATION:
{company_info}

BASE RESUME INFORMATION:
{base_resume}

INSTRUCTIONS:
**Generate only the resume content, excluding any introduction or conclusion.**
1. Keep all factual information accurate (name, contact info, education, etc.)
2. Tailor the experience descriptions to highlight relevant skills for this job
3. Reorder skills to prioritize those mentioned in the job description
4. Adjust project descriptions to emphasize relevant aspects
5. Modify the summary to align with the job requirements
6. Keep the output format as a well-structured resume
7. Do not add any made-up information - only work with what's provided
8. Focus on quantifiable achievements where possible
9. Use keywords from the job description
10. Keep the length to one page only, no more than 600 words
11. Do not include any <think> section or other internal reasoning

Please output the tailored resume in the following format:

NAME: [Full Name]
CONTACT: [Email] | [Phone] | [Location]

SUMMARY:
[2-3 sentence professional summary tailored to the role]

EDUCATION:
[Education details - keep factual but emphasize relevant coursework if applicable]

EXPERIENCE:
[Experience details - tailored for the job with bullet points highlighting relevant achievements]

SKILLS:
[Skills categorized and reordered with most relevant first]

PROJECTS:
[Project details - tailored to emphasize relevant aspects]

CERTIFICATIONS:
[Certification list - keep any that are relevant]"#;

/// Cover letter prompt template.
/// Replace: {job_title}, {job_description}, {company_info}, {tailored_resume}
const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"TASK: Write a cover letter for a {job_title} position.
Return the output in **Markdown format** with headings and paragraphs.

JOB DESCRIPTION:
{job_description}

COMPANY INFORMATION:
{company_info}

TAILORED RESUME:
{tailored_resume}

INSTRUCTIONS:
**Provide only the cover letter - no introduction or conclusion.**
1. Address the letter to "Hiring Manager" (unless a specific name is known)
2. Highlight the most relevant qualifications from the resume
3. Show enthusiasm for the specific role and company
4. Keep it professional but engaging
5. Limit to 3-4 paragraphs
6. Use standard business letter format
7. Include specific examples of achievements that match the job requirements
8. Mention why you're interested in this specific company
9. Avoid generic phrases - be specific and authentic
10. End with a call to action about next steps
11. Keep it to no more than 20 lines and 400 words
12. Do not include any <think> section or other internal reasoning

Please output the cover letter in the following format:

[Date]

Hiring Manager
[Company Name]

Dear Hiring Manager,

[Opening paragraph - express interest in the position and company]

[Middle paragraph(s) - highlight relevant experience and skills]

[Closing paragraph - express enthusiasm for next steps]

Sincerely,
[Name]
[Contact Information]"#;

/// Builds the résumé tailoring prompt from the request fields.
pub fn resume_prompt(
    base_resume: &str,
    job_title: &str,
    job_description: &str,
    company_info: &str,
) -> String {
    RESUME_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{job_description}", job_description)
        .replace("{company_info}", company_info)
        .replace("{base_resume}", base_resume)
}

/// Builds the cover letter prompt. `tailored_resume` is the sanitized output
/// of the résumé generation stage; the cover letter is written against the
/// tailored document, not the base résumé, so the two stages are ordered.
pub fn cover_letter_prompt(
    job_title: &str,
    job_description: &str,
    company_info: &str,
    tailored_resume: &str,
) -> String {
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{job_description}", job_description)
        .replace("{company_info}", company_info)
        .replace("{tailored_resume}", tailored_resume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_prompt_contains_all_inputs() {
        let prompt = resume_prompt(
            "Jane Doe, 5y backend",
            "Backend Engineer",
            "Go, distributed systems",
            "Acme",
        );
        assert!(prompt.contains("Jane Doe, 5y backend"));
        assert!(prompt.contains("Tailor this resume for a Backend Engineer position"));
        assert!(prompt.contains("Go, distributed systems"));
        assert!(prompt.contains("Acme"));
    }

    #[test]
    fn test_resume_prompt_requests_fixed_section_layout() {
        let prompt = resume_prompt("r", "t", "d", "");
        for section in [
            "NAME:",
            "CONTACT:",
            "SUMMARY:",
            "EDUCATION:",
            "EXPERIENCE:",
            "SKILLS:",
            "PROJECTS:",
            "CERTIFICATIONS:",
        ] {
            assert!(prompt.contains(section), "missing section {section}");
        }
    }

    #[test]
    fn test_resume_prompt_is_deterministic() {
        let a = resume_prompt("r", "t", "d", "c");
        let b = resume_prompt("r", "t", "d", "c");
        assert_eq!(a, b);
    }

    #[test]
    fn test_cover_letter_prompt_embeds_full_tailored_resume() {
        let tailored = "NAME: Jane Doe\nSUMMARY: builds backends.\nEXPERIENCE: Acme, 5 years.";
        let prompt = cover_letter_prompt("Backend Engineer", "Go", "Acme", tailored);
        assert!(prompt.contains(tailored));
    }

    #[test]
    fn test_cover_letter_prompt_requests_business_letter_layout() {
        let prompt = cover_letter_prompt("t", "d", "c", "resume");
        assert!(prompt.contains("[Date]"));
        assert!(prompt.contains("Dear Hiring Manager,"));
        assert!(prompt.contains("3-4 paragraphs"));
        assert!(prompt.contains("Sincerely,"));
    }

    #[test]
    fn test_prompts_forbid_reasoning_markup() {
        assert!(resume_prompt("r", "t", "d", "").contains("<think>"));
        assert!(cover_letter_prompt("t", "d", "", "r").contains("<think>"));
    }
}
