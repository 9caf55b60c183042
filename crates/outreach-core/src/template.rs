//! Canned outreach email templates.
//!
//! Subjects and bodies carry `{role}` and `{country}` placeholders. Clients
//! usually substitute them; [`EmailTemplate::render`] does it server-side.

use serde::Serialize;

/// A subject/body pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailTemplate {
  pub subject: String,
  pub body:    String,
}

impl EmailTemplate {
  /// Substitute `{role}` and `{country}` in both subject and body.
  pub fn render(&self, role: &str, country: &str) -> Self {
    let fill = |s: &str| s.replace("{role}", role).replace("{country}", country);
    Self {
      subject: fill(&self.subject),
      body:    fill(&self.body),
    }
  }
}

const CATALOGUE: [(&str, &str); 4] = [
  (
    "Exploring Opportunities for {role} in {country}",
    "Dear [Recipient’s Name],

I hope this message finds you well. I came across your profile and was impressed by your experience and expertise. I am reaching out to explore potential opportunities for the position of {role} within {country}.

I believe your skills and background align well with current needs, and I would love to discuss how we might collaborate or connect.

Looking forward to hearing from you.

Best regards,
[Your Name]",
  ),
  (
    "Potential Collaboration Regarding {role} Role in {country}",
    "Hello,

My name is [Your Name], and I am interested in connecting regarding possible roles related to {role} in {country}. Your professional background caught my attention, and I would appreciate the chance to discuss any available opportunities or mutual interests.

Please let me know if you are open for a brief conversation.

Warm regards,
[Your Name]",
  ),
  (
    "Opportunity Discussion for {role} in {country}",
    "Dear [Recipient’s Name],

I hope this email reaches you well. I am currently seeking to connect with professionals experienced in the field of {role} within {country}. Your profile stood out as a strong fit, and I am eager to explore how we might engage professionally.

If convenient, I would be grateful for a moment of your time to discuss potential collaborations.

Thank you for your consideration.

Sincerely,
[Your Name]",
  ),
  (
    "Networking and {role} Opportunities in {country}",
    "Hi there,

I hope you are doing well. I am reaching out to professionals like yourself to discuss prospects related to {role} in {country}. Your accomplishments and expertise greatly impressed me, and I believe there might be valuable synergies between us.

I look forward to the possibility of connecting.

Best regards,
[Your Name]",
  ),
];

/// The fixed template catalogue, unrendered.
pub fn catalogue() -> Vec<EmailTemplate> {
  CATALOGUE
    .iter()
    .map(|(subject, body)| EmailTemplate {
      subject: (*subject).to_owned(),
      body:    (*body).to_owned(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn catalogue_has_four_templates_with_placeholders() {
    let templates = catalogue();
    assert_eq!(templates.len(), 4);
    for t in &templates {
      assert!(t.subject.contains("{role}"), "{}", t.subject);
      assert!(t.subject.contains("{country}"), "{}", t.subject);
      assert!(t.body.contains("{role}"));
    }
  }

  #[test]
  fn render_fills_every_placeholder() {
    let rendered = catalogue()[0].render("Engineer", "India");
    assert_eq!(rendered.subject, "Exploring Opportunities for Engineer in India");
    assert!(rendered.body.contains("position of Engineer within India"));
    assert!(!rendered.body.contains('{'));
  }
}
