// src/presentation/http/views.rs
use crate::application::{dto::ArticleDto, forms::ValidationErrors};
use crate::presentation::http::{
    error::{HttpError, HttpResult},
    flash::FlashMessage,
    routes::IMAGE_ROUTE,
};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

const ERROR_TEMPLATE: &str = include_str!("../../../templates/error.html");

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../../templates/base.html")),
    ("article/index.html", include_str!("../../../templates/article/index.html")),
    ("article/liste.html", include_str!("../../../templates/article/liste.html")),
    ("article/_form.html", include_str!("../../../templates/article/_form.html")),
    ("article/creer.html", include_str!("../../../templates/article/creer.html")),
    ("article/update.html", include_str!("../../../templates/article/update.html")),
];

/// Values echoed back into the form inputs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormValues {
    pub title: String,
    pub content: String,
}

impl From<&ArticleDto> for FormValues {
    fn from(article: &ArticleDto) -> Self {
        Self {
            title: article.title.clone(),
            content: article.body.clone(),
        }
    }
}

pub enum ArticleFormPage<'a> {
    Create,
    Update(&'a ArticleDto),
}

pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    fn render(&self, template: &str, context: &Context) -> HttpResult<Html<String>> {
        self.tera.render(template, context).map(Html).map_err(|err| {
            tracing::error!(template, error = ?err, "template rendering failed");
            HttpError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "page rendering failed".into(),
            )
        })
    }

    fn base_context(flash: Option<&FlashMessage>) -> Context {
        let mut context = Context::new();
        context.insert("flash", &flash);
        context.insert("image_base", IMAGE_ROUTE);
        context
    }

    pub fn index(&self, flash: Option<&FlashMessage>) -> HttpResult<Html<String>> {
        self.render("article/index.html", &Self::base_context(flash))
    }

    pub fn article_list(
        &self,
        articles: &[ArticleDto],
        flash: Option<&FlashMessage>,
    ) -> HttpResult<Html<String>> {
        let mut context = Self::base_context(flash);
        context.insert("titre", "Liste d'article");
        context.insert("articles", articles);
        self.render("article/liste.html", &context)
    }

    pub fn article_form(
        &self,
        page: ArticleFormPage<'_>,
        values: &FormValues,
        errors: &ValidationErrors,
    ) -> HttpResult<Html<String>> {
        let mut context = Self::base_context(None);
        context.insert("values", values);
        context.insert("errors", errors);

        let template = match page {
            ArticleFormPage::Create => {
                context.insert("titre", "Article");
                context.insert("action", "/article/creer");
                context.insert("submit_label", "Créer");
                "article/creer.html"
            }
            ArticleFormPage::Update(article) => {
                context.insert("main_title", "Article");
                context.insert("titre", "Modification d'article");
                context.insert("action", &format!("/article/update/{}", article.id));
                context.insert("submit_label", "Enregistrer");
                context.insert("article", article);
                "article/update.html"
            }
        };
        self.render(template, &context)
    }
}

/// Renders the standalone error page; falls back to plain text if that fails.
pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let mut context = Context::new();
    context.insert("status", &status.as_u16());
    context.insert("reason", status.canonical_reason().unwrap_or("Error"));
    context.insert("message", message);
    Tera::one_off(ERROR_TEMPLATE, &context, true).unwrap_or_else(|err| {
        tracing::error!(error = ?err, "error page rendering failed");
        format!("{status}: {message}")
    })
}
