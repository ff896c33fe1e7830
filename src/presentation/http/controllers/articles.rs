// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    error::ApplicationError,
    forms::ValidationErrors,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::MaybeAuthenticated,
    flash::{FlashMessage, IncomingFlash, consume_flash, redirect_with_flash},
    forms::{bind_article_form, multipart_rejection},
    routes::LIST_PATH,
    state::HttpState,
    views::{ArticleFormPage, FormValues},
};
use axum::{
    Extension,
    extract::{Multipart, Path, multipart::MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub async fn index(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
) -> HttpResult<Response> {
    let page = state.views.index(flash.0.as_ref())?;
    Ok(consume_flash(page, &flash))
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
) -> HttpResult<Response> {
    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .into_http()?;

    let page = state.views.article_list(&articles, flash.0.as_ref())?;
    Ok(consume_flash(page, &flash))
}

pub async fn create_form(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Response> {
    state
        .services
        .article_commands
        .authorize(actor.user())
        .into_http()?;

    let page = state.views.article_form(
        ArticleFormPage::Create,
        &FormValues::default(),
        &ValidationErrors::new(),
    )?;
    Ok(page.into_response())
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    multipart: Result<Multipart, MultipartRejection>,
) -> HttpResult<Response> {
    let commands = &state.services.article_commands;
    commands.authorize(actor.user()).into_http()?;

    let input = bind_article_form(multipart.map_err(multipart_rejection)?).await?;
    let values = FormValues {
        title: input.title.clone(),
        content: input.content.clone(),
    };

    match commands
        .create_article(actor.user(), CreateArticleCommand::from(input))
        .await
    {
        Ok(_) => Ok(redirect_with_flash(
            LIST_PATH,
            FlashMessage::success("Article ajouté !"),
        )),
        Err(ApplicationError::InvalidForm(errors)) => {
            let page = state
                .views
                .article_form(ArticleFormPage::Create, &values, &errors)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Gate and lookup shared by both update routes.
async fn load_editable(
    state: &HttpState,
    actor: &MaybeAuthenticated,
    id: i64,
) -> HttpResult<ArticleDto> {
    state
        .services
        .article_commands
        .authorize(actor.user())
        .into_http()?;
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
}

pub async fn update_form(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let article = load_editable(&state, &actor, id).await?;

    let page = state.views.article_form(
        ArticleFormPage::Update(&article),
        &FormValues::from(&article),
        &ValidationErrors::new(),
    )?;
    Ok(page.into_response())
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
    multipart: Result<Multipart, MultipartRejection>,
) -> HttpResult<Response> {
    // Auth and existence are settled before the body is looked at.
    let current = load_editable(&state, &actor, id).await?;

    let input = bind_article_form(multipart.map_err(multipart_rejection)?).await?;
    let values = FormValues {
        title: input.title.clone(),
        content: input.content.clone(),
    };
    let command = UpdateArticleCommand {
        id,
        title: input.title,
        content: input.content,
        image: input.image,
    };

    match state
        .services
        .article_commands
        .update_article(actor.user(), command)
        .await
    {
        Ok(_) => Ok(redirect_with_flash(
            LIST_PATH,
            FlashMessage::success(format!("Article n°{id} modifié !")),
        )),
        Err(ApplicationError::InvalidForm(errors)) => {
            let page = state
                .views
                .article_form(ArticleFormPage::Update(&current), &values, &errors)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    state
        .services
        .article_commands
        .delete_article(actor.user(), DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(redirect_with_flash(
        LIST_PATH,
        FlashMessage::success(format!("Article n°{id} supprimé !")),
    ))
}
