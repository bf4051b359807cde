//! HTML views
//!
//! Templates are compiled into the binary and parsed once at startup.

use salvo::{prelude::StatusError, writing::Text};
use serde::Serialize;
use tera::{Context, Tera};

use crate::extensions::*;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("menu.html", include_str!("../templates/menu.html")),
    ("cart.html", include_str!("../templates/cart.html")),
    ("confirmation.html", include_str!("../templates/confirmation.html")),
    ("kitchen.html", include_str!("../templates/kitchen.html")),
    ("kitchen_feed.html", include_str!("../templates/kitchen_feed.html")),
    ("image_result.html", include_str!("../templates/image_result.html")),
];

#[derive(Debug)]
pub(crate) struct Views {
    tera: Tera,
}

impl Views {
    /// Parse every template.
    ///
    /// # Errors
    ///
    /// Returns an error when a template fails to parse.
    pub(crate) fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();

        tera.add_raw_templates(TEMPLATES.iter().copied())?;

        Ok(Self { tera })
    }

    /// Render `template` with the fields of `view` as its context.
    pub(crate) fn render<T: Serialize>(
        &self,
        template: &str,
        view: &T,
    ) -> Result<Text<String>, StatusError> {
        let context = Context::from_serialize(view).or_500("failed to build template context")?;

        self.tera
            .render(template, &context)
            .map(Text::Html)
            .or_500("failed to render template")
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[derive(Serialize)]
    struct Message<'a> {
        message: &'a str,
        status: u16,
    }

    #[test]
    fn all_templates_parse() -> TestResult {
        let views = Views::new()?;

        for (name, _) in TEMPLATES {
            assert!(
                views.tera.get_template_names().any(|known| known == *name),
                "{name} should be registered"
            );
        }

        Ok(())
    }

    #[test]
    fn html_is_escaped() -> TestResult {
        let views = Views::new()?;

        let Text::Html(html) = views.render(
            "image_result.html",
            &Message {
                message: "<script>",
                status: 502,
            },
        )?
        else {
            return Err("expected html".into());
        };

        assert!(html.contains("&lt;script&gt;"), "{html}");

        Ok(())
    }
}
