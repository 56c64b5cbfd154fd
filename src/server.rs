use std::io;
use std::io::ErrorKind;
use std::sync::Arc;

use ntex::http::StatusCode;
use ntex::web;
use ntex_files::NamedFile;
use spdlog::{error, info};

use crate::blog::display::PageMeta;
use crate::blog::service::{Blog, PostLookup};
use crate::config::Config;
use crate::pages::load_page;
use crate::view::list_renderer::ListRenderer;
use crate::view::page_renderer::PageRenderer;
use crate::view::post_renderer::PostRenderer;
use crate::view::read_template;
use crate::view::status_renderer::{StatusMessage, StatusRenderer, BLOG_UNAVAILABLE, PAGE_NOT_FOUND, POST_NOT_FOUND};
use crate::wordpress::client::{PostSource, WpClient};

const FALLBACK_ERROR_PAGE: &str = "<!DOCTYPE html><html><body><h1>Something went wrong</h1><p>Please try again in a few minutes.</p></body></html>";

struct AppState<S: PostSource> {
    config: Config,
    blog: Blog<S>,
}

type State = web::types::State<Arc<AppState<WpClient>>>;

/// Status and HTML body of a page
#[derive(Debug)]
struct Reply {
    status: StatusCode,
    body: String,
}

impl Reply {
    fn html(status: StatusCode, rendered: io::Result<String>) -> Reply {
        match rendered {
            Ok(body) => Reply { status, body },
            Err(e) => {
                error!("Error rendering page: {}", e);
                Reply {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: FALLBACK_ERROR_PAGE.to_string(),
                }
            }
        }
    }

    fn into_response(self) -> web::HttpResponse {
        web::HttpResponse::build(self.status)
            .content_type("text/html; charset=utf-8")
            .body(self.body)
    }
}

fn render_status(config: &Config, status: &StatusMessage, template_filename: &str) -> io::Result<String> {
    let template_src = read_template(&config.paths.template_dir, template_filename)?;
    let renderer = StatusRenderer::new(&template_src)?;
    Ok(renderer.render(&config.site, status))
}

fn not_found_reply(config: &Config, status: &StatusMessage) -> Reply {
    Reply::html(StatusCode::NOT_FOUND, render_status(config, status, "not_found.tpl"))
}

fn render_index(config: &Config) -> io::Result<String> {
    let site = &config.site;
    let template_src = read_template(&config.paths.template_dir, "index.tpl")?;
    let renderer = PageRenderer::new(&template_src)?;
    let meta = PageMeta::new("", &site.name, &site.description);
    Ok(renderer.render(site, &meta, &site.name, ""))
}

async fn list_reply<S: PostSource>(state: &AppState<S>) -> Reply {
    let config = &state.config;
    let posts = match state.blog.list_posts().await {
        Ok(posts) => posts,
        Err(_) => {
            // Already logged by the blog, the visitor gets the generic error page
            return Reply::html(StatusCode::INTERNAL_SERVER_ERROR, render_status(config, &BLOG_UNAVAILABLE, "error.tpl"));
        }
    };

    let rendered = read_template(&config.paths.template_dir, "postlist.tpl").and_then(|template_src| {
        let renderer = ListRenderer::new(&template_src)?;
        let meta = PageMeta::new("Blog", &config.site.name, &config.site.description);
        Ok(renderer.render(&config.site, &meta, &posts))
    });
    Reply::html(StatusCode::OK, rendered)
}

async fn post_reply<S: PostSource>(state: &AppState<S>, slug: &str) -> Reply {
    let config = &state.config;
    let post = match state.blog.find_post(slug).await {
        PostLookup::Found(post) => post,
        PostLookup::NotFound => return not_found_reply(config, &POST_NOT_FOUND),
    };

    let rendered = read_template(&config.paths.template_dir, "view.tpl").and_then(|template_src| {
        let renderer = PostRenderer::new(&template_src)?;
        let meta = PageMeta::for_post(&post, &config.site.name);
        Ok(renderer.render(&config.site, &meta, &post))
    });
    Reply::html(StatusCode::OK, rendered)
}

fn page_reply(config: &Config, page_name: &str) -> Reply {
    let page = match load_page(&config.paths.pages_dir, page_name) {
        Ok(page) => page,
        Err(e) if e.kind() == ErrorKind::NotFound => return not_found_reply(config, &PAGE_NOT_FOUND),
        Err(e) => return Reply::html(StatusCode::INTERNAL_SERVER_ERROR, Err(e)),
    };

    let rendered = read_template(&config.paths.template_dir, "page.tpl").and_then(|template_src| {
        let renderer = PageRenderer::new(&template_src)?;
        let meta = PageMeta::new(&page.title, &config.site.name, &config.site.description);
        Ok(renderer.render(&config.site, &meta, &page.title, &page.rendered))
    });
    Reply::html(StatusCode::OK, rendered)
}

// Begin: Redirect region --------
#[web::get("/blog/")]
async fn list_with_slash() -> web::HttpResponse {
    web::HttpResponse::MovedPermanently()
        .header("Location", "/blog")
        .content_type("text/html; charset=utf-8")
        .finish()
}

#[web::get("/blog/{slug}")]
async fn view_wo_slash(path: web::types::Path<String>) -> web::HttpResponse {
    web::HttpResponse::TemporaryRedirect()
        .header("Location", path.into_inner() + "/")
        .content_type("text/html; charset=utf-8")
        .finish()
}

#[web::get("/page/{page}")]
async fn page_wo_slash(path: web::types::Path<String>) -> web::HttpResponse {
    web::HttpResponse::TemporaryRedirect()
        .header("Location", path.into_inner() + "/")
        .content_type("text/html; charset=utf-8")
        .finish()
}
// End: Redirect region --------

#[web::get("/")]
async fn index(state: State) -> web::HttpResponse {
    Reply::html(StatusCode::OK, render_index(&state.config)).into_response()
}

#[web::get("/blog")]
async fn list(state: State) -> web::HttpResponse {
    let state: &AppState<WpClient> = &state;
    list_reply(state).await.into_response()
}

#[web::get("/blog/{slug}/")]
async fn view(slug: web::types::Path<String>, state: State) -> web::HttpResponse {
    let state: &AppState<WpClient> = &state;
    post_reply(state, &slug.into_inner()).await.into_response()
}

#[web::get("/page/{page}/")]
async fn page_view(page_name: web::types::Path<String>, state: State) -> web::HttpResponse {
    page_reply(&state.config, &page_name.into_inner()).into_response()
}

#[web::get("/public/{file_name}")]
async fn public_files(path: web::types::Path<String>, state: State) -> Result<NamedFile, web::Error> {
    if path.contains("..") || path.contains('/') {
        return Err(web::error::ErrorUnauthorized("Access forbidden").into());
    }

    let file_path = state.config.paths.public_dir.join(path.into_inner());
    Ok(NamedFile::open(file_path)?)
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let client = match WpClient::new(&config.wordpress) {
        Ok(client) => client,
        Err(e) => return Err(io::Error::new(ErrorKind::Other, format!("Error creating HTTP client: {}", e))),
    };
    info!("Reading posts from {}", config.wordpress.api_base);

    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    let blog = Blog::new(client, &config.defaults);
    let app_state = Arc::new(AppState {
        config,
        blog,
    });

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(index)
            .service(public_files)
            .service(list)
            .service(list_with_slash)
            .service(view)
            .service(view_wo_slash)
            .service(page_view)
            .service(page_wo_slash)
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
