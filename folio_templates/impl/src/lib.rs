use std::sync::Arc;

use folio_templates_contracts::{Template, TemplateService, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    state: State,
}

impl TemplateServiceImpl {
    pub fn new() -> Self {
        Self {
            state: Default::default(),
        }
    }
}

impl Default for TemplateServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template).unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.state.0.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use folio_templates_contracts::ContactNotificationTemplate;

    use super::*;

    #[test]
    fn contact_notification() {
        // Arrange
        let sut = TemplateServiceImpl::new();

        // Act
        let result = sut
            .render(&ContactNotificationTemplate {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Hello".into(),
                submitted_at: "23/08/2026 12:00".into(),
                year: 2026,
            })
            .unwrap();

        // Assert
        assert!(result.contains("Ada"));
        assert!(result.contains("ada@example.com"));
        assert!(result.contains("Hello"));
        assert!(result.contains("23/08/2026 12:00"));
    }

    #[test]
    fn contact_notification_escapes_html() {
        // Arrange
        let sut = TemplateServiceImpl::new();

        // Act
        let result = sut
            .render(&ContactNotificationTemplate {
                name: "<script>alert(1)</script>".into(),
                email: "ada@example.com".into(),
                message: "a < b & b > c".into(),
                submitted_at: "23/08/2026 12:00".into(),
                year: 2026,
            })
            .unwrap();

        // Assert
        assert!(!result.contains("<script>"));
        assert!(result.contains("&lt;script&gt;"));
        assert!(result.contains("a &lt; b &amp; b &gt; c"));
    }
}
