//! Markdown bodies for each note type.
//!
//! Every template starts with the rendered frontmatter block, a blank line and
//! a `# <emoji> <title>` heading, followed by the type's section skeleton.

use crate::parser::render_frontmatter;
use crate::types::Frontmatter;

pub(super) fn business_idea(title: &str, fm: &Frontmatter) -> String {
    format!(
        "{}\n\n\
         # 💡 {title}\n\n\
         ## The Spark\n\
         <!-- What inspired this idea? What problem does it solve? -->\n\n\n\
         ## How It Works\n\
         <!-- Describe the concept -->\n\n\n\
         ## Next Steps\n\
         <!-- What would need to happen to move this forward? -->\n\n\n\
         ## Notes\n\n",
        render_frontmatter(fm)
    )
}

pub(super) fn business_idea_problem(title: &str, fm: &Frontmatter) -> String {
    format!(
        "{}\n\n\
         # 🔧 {title}\n\n\
         ## What's Broken?\n\
         <!-- Describe the problem clearly -->\n\n\n\
         ## Impact\n\
         <!-- How does this affect the business? Customers? Team? -->\n\n\n\
         ## Possible Solutions\n\
         <!-- Brainstorm fixes -->\n\
         - \n\n\
         ## Next Steps\n\n",
        render_frontmatter(fm)
    )
}

pub(super) fn business_issue(title: &str, fm: &Frontmatter) -> String {
    format!(
        "{}\n\n\
         # 🔧 {title}\n\n\
         ## What's Wrong?\n\
         <!-- Describe the issue -->\n\n\n\
         ## Impact\n\
         <!-- Severity: 🔴 Critical / 🟡 Moderate / 🟢 Low -->\n\n\n\
         ## Steps to Reproduce\n\
         1. \n\n\
         ## Resolution\n\
         <!-- How was it fixed? (fill in when resolved) -->\n\n\n\
         ## Notes\n\n",
        render_frontmatter(fm)
    )
}

pub(super) fn business_log(title: &str, fm: &Frontmatter) -> String {
    format!(
        "{}\n\n\
         # 📓 {title}\n\n\
         ## Summary\n\
         <!-- What happened? Key takeaways? -->\n\n\n\
         ## Details\n\n\n\
         ## Action Items\n\
         - [ ] \n\n",
        render_frontmatter(fm)
    )
}

pub(super) fn business_sop(title: &str, fm: &Frontmatter) -> String {
    format!(
        "{}\n\n\
         # 📋 {title}\n\n\
         ## Purpose\n\
         <!-- What is this document for? When should someone reference it? -->\n\n\n\
         ## Steps\n\
         1. \n\n\
         ## Notes\n\
         <!-- Tips, common mistakes, edge cases -->\n\n",
        render_frontmatter(fm)
    )
}

pub(super) fn business_contact(title: &str, fm: &Frontmatter) -> String {
    format!(
        "{}\n\n\
         # 👤 {title}\n\n\
         ## Contact Info\n\
         - **Company:** \n\
         - **Role:** \n\
         - **Email:** \n\
         - **Phone:** \n\n\
         ## Relationship Notes\n\
         <!-- How do we work with them? Preferences? History? -->\n\n\n\
         ## Order / Account Notes\n\n\n\
         ## Communication Log\n\
         | Date | Notes |\n\
         |------|-------|\n\
         | {created} | Initial contact |\n\n",
        render_frontmatter(fm),
        created = fm.created
    )
}

pub(super) fn business_todo(title: &str, fm: &Frontmatter) -> String {
    format!(
        "{}\n\n\
         # ✅ {title}\n\n\
         ## What needs to be done?\n\n\n\
         ## Context\n\
         <!-- Why does this matter? Any dependencies? -->\n\n\n\
         ## Subtasks\n\
         - [ ] \n\n",
        render_frontmatter(fm)
    )
}

pub(super) fn personal_idea(title: &str, fm: &Frontmatter) -> String {
    format!(
        "{}\n\n\
         # 💡 {title}\n\n\
         ## The Spark\n\n\n\
         ## How It Works\n\n\n\
         ## Next Steps\n\n",
        render_frontmatter(fm)
    )
}

pub(super) fn personal_reference(title: &str, fm: &Frontmatter) -> String {
    format!("{}\n\n# 🔖 {title}\n\n\n", render_frontmatter(fm))
}

pub(super) fn personal_people(title: &str, fm: &Frontmatter) -> String {
    format!(
        "{}\n\n\
         # 👥 {title}\n\n\
         ## About\n\
         - **Relationship:** \n\
         - **Contact:** \n\n\
         ## Gift Ideas\n\
         - \n\n\
         ## Important Dates\n\
         - \n\n\
         ## Notes\n\
         <!-- Things they've mentioned, preferences, conversation notes -->\n\n",
        render_frontmatter(fm)
    )
}

pub(super) fn personal_todo(title: &str, fm: &Frontmatter) -> String {
    format!(
        "{}\n\n\
         # ✅ {title}\n\n\
         ## What needs to be done?\n\n\n\
         ## Subtasks\n\
         - [ ] \n\n",
        render_frontmatter(fm)
    )
}

pub(super) fn list_shopping(title: &str, fm: &Frontmatter) -> String {
    format!(
        "{}\n\n# 🛒 {title}\n\n## Items\n- [ ] \n\n",
        render_frontmatter(fm)
    )
}

pub(super) fn list_checklist(title: &str, fm: &Frontmatter) -> String {
    format!("{}\n\n# ✅ {title}\n\n- [ ] \n\n", render_frontmatter(fm))
}

pub(super) fn list_scratch(title: &str, fm: &Frontmatter) -> String {
    format!("{}\n\n# 📝 {title}\n\n\n", render_frontmatter(fm))
}
