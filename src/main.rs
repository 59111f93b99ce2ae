//! `presto`: command-line front end for the Presto slide editor.
//!
//! Every command maps onto one client operation: auth flows, the dashboard,
//! or an editor session opened on a presentation and slide. Output is plain
//! text for confirmations and pretty JSON for documents and scenes.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use client::error::{ApiError, AuthError, EditorError};
use client::forms::{
    BackgroundForm, CodeForm, ImageForm, LoginForm, NewPresentationForm, RegisterForm, TextBoxForm, ThumbnailForm,
    TitleForm, VideoForm,
};
use client::media::data_url_from_file;
use client::{ClientConfig, Dashboard, Editor, FileTokenStore, Gateway, HttpBackend, Route, auth};
use deck::elements::ElementPatch;
use deck::render::export_html;
use deck::{
    Background, BackgroundKind, CodeBody, DeckError, ElementId, ElementKind, ImageBody, Position, Size, TextBody,
    VideoBody,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

const DEFAULT_LOG_FILTER: &str = "presto=info,client=info";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Editor(#[from] EditorError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("failed to read {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    WriteFile { path: PathBuf, source: io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("choose one of --color, --gradient or --image")]
    MissingBackground,
    #[error("--width/--height are not accepted by `element edit`; use `element resize`")]
    SizeOnEdit,
}

#[derive(Parser, Debug)]
#[command(name = "presto", about = "Presto slide editor CLI")]
struct Cli {
    /// Overrides `PRESTO_BACKEND_URL`.
    #[arg(long)]
    backend_url: Option<String>,

    /// Overrides `PRESTO_TOKEN_FILE`.
    #[arg(long)]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    /// List presentations as dashboard cards.
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Thumbnail URL.
        #[arg(long, conflicts_with = "thumbnail_file")]
        thumbnail: Option<String>,
        #[arg(long)]
        thumbnail_file: Option<PathBuf>,
    },
    /// Print one slide's layout as JSON.
    Show(Target),
    Rename {
        id: String,
        title: String,
    },
    Delete {
        id: String,
    },
    Thumbnail {
        id: String,
        #[arg(long, conflicts_with = "file")]
        url: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    Background(BackgroundArgs),
    Slide(SlideCommand),
    Element(ElementCommand),
    /// Print the preview route and slide counter.
    Preview(Target),
    /// Write the whole presentation as standalone HTML.
    Export {
        id: String,
        #[arg(long, help = "Output path, or stdout when absent")]
        out: Option<PathBuf>,
    },
    /// Parse a client URL and print the normalized route.
    Route {
        url: String,
    },
}

#[derive(Args, Debug)]
struct Target {
    id: String,
    #[arg(long, default_value_t = 0)]
    slide: usize,
}

#[derive(Args, Debug)]
struct BackgroundArgs {
    #[command(flatten)]
    target: Target,
    /// Set the presentation default instead of the slide's own background.
    #[arg(long, default_value_t = false)]
    default: bool,
    #[arg(long, group = "fill")]
    color: Option<String>,
    #[arg(long, group = "fill", num_args = 2, value_names = ["START", "END"])]
    gradient: Option<Vec<String>>,
    #[arg(long, default_value = "to right")]
    direction: String,
    #[arg(long, group = "fill")]
    image: Option<String>,
}

#[derive(Args, Debug)]
struct SlideCommand {
    #[command(subcommand)]
    command: SlideSubcommand,
}

#[derive(Subcommand, Debug)]
enum SlideSubcommand {
    Add { id: String },
    Delete(Target),
    Move {
        id: String,
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },
}

#[derive(Args, Debug)]
struct ElementCommand {
    #[command(subcommand)]
    command: ElementSubcommand,
}

#[derive(Subcommand, Debug)]
enum ElementSubcommand {
    Add {
        #[command(flatten)]
        target: Target,
        #[command(subcommand)]
        body: BodyArgs,
    },
    Edit {
        #[command(flatten)]
        target: Target,
        #[arg(long)]
        element: ElementId,
        #[command(subcommand)]
        body: BodyArgs,
    },
    /// Set the top-left corner, in percent.
    Move {
        #[command(flatten)]
        target: Target,
        #[arg(long)]
        kind: ElementKind,
        #[arg(long)]
        element: ElementId,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
    },
    /// Set the size, in percent.
    Resize {
        #[command(flatten)]
        target: Target,
        #[arg(long)]
        kind: ElementKind,
        #[arg(long)]
        element: ElementId,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
    },
    Remove {
        #[command(flatten)]
        target: Target,
        #[arg(long)]
        kind: ElementKind,
        #[arg(long)]
        element: ElementId,
    },
}

/// Element fields. Absent values keep the form default on add and the
/// element's current value on edit. Size is only accepted on add.
#[derive(Subcommand, Debug)]
enum BodyArgs {
    Text {
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        font_size: Option<f64>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        font_family: Option<String>,
        #[command(flatten)]
        size: SizeArgs,
    },
    Image {
        #[arg(long, conflicts_with = "file")]
        url: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        alt: Option<String>,
        #[command(flatten)]
        size: SizeArgs,
    },
    Video {
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        autoplay: Option<bool>,
        #[command(flatten)]
        size: SizeArgs,
    },
    Code {
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        font_size: Option<f64>,
        #[command(flatten)]
        size: SizeArgs,
    },
}

#[derive(Args, Debug)]
struct SizeArgs {
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
}

impl SizeArgs {
    fn is_set(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }
}

impl BodyArgs {
    fn size(&self) -> &SizeArgs {
        match self {
            Self::Text { size, .. } | Self::Image { size, .. } | Self::Video { size, .. } | Self::Code { size, .. } => {
                size
            }
        }
    }
}

fn set<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();
    if let Err(e) = dotenv {
        debug!(error = %e, "no .env loaded");
    }

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.backend_url {
        config = config.with_backend_url(url);
    }
    if let Some(path) = cli.token_file {
        config.token_file = path;
    }
    let gateway = Gateway::new(Arc::new(HttpBackend::new(&config)?), Arc::new(FileTokenStore::new(&config.token_file)));

    run(&gateway, cli.command).await
}

async fn run(gateway: &Gateway, command: Command) -> Result<(), CliError> {
    let now = Instant::now();
    match command {
        Command::Register { email, name, password, confirm_password } => {
            let form = RegisterForm { email, name, password, confirm_password };
            let route = auth::register(gateway, &form).await?;
            println!("registered; continue at {route}");
        }
        Command::Login { email, password } => {
            let route = auth::login(gateway, &LoginForm { email, password }).await?;
            println!("logged in; continue at {route}");
        }
        Command::Logout => {
            auth::logout(gateway).await?;
            println!("logged out");
        }
        Command::List => {
            let dashboard = Dashboard::load(gateway.clone()).await?;
            for card in dashboard.cards() {
                println!("{}  {}  ({})", card.id, card.title, card.slide_count);
                if let Some(description) = card.description {
                    println!("    {description}");
                }
            }
        }
        Command::Create { name, description, thumbnail, thumbnail_file } => {
            let thumbnail = match thumbnail_file {
                Some(path) => Some(read_data_url(&path).await?),
                None => thumbnail,
            };
            let mut dashboard = Dashboard::load(gateway.clone()).await?;
            let id = dashboard.create(&NewPresentationForm { name, description, thumbnail }, now).await?;
            println!("{id}");
        }
        Command::Show(target) => {
            let editor = open(gateway, &target).await?;
            print_json(&editor.scene()?)?;
        }
        Command::Rename { id, title } => {
            let mut editor = Editor::open(gateway.clone(), &id, 0).await?;
            editor.rename(&TitleForm { title }, now).await?;
            println!("renamed to {}", editor.presentation().name);
        }
        Command::Delete { id } => {
            let mut editor = Editor::open(gateway.clone(), &id, 0).await?;
            let route = editor.delete_presentation().await?;
            println!("deleted; continue at {route}");
        }
        Command::Thumbnail { id, url, file } => {
            let form = match file {
                Some(path) => ThumbnailForm { url: String::new(), file_data: Some(read_data_url(&path).await?) },
                None => ThumbnailForm { url: url.unwrap_or_default(), file_data: None },
            };
            let mut editor = Editor::open(gateway.clone(), &id, 0).await?;
            editor.set_thumbnail(&form).await?;
            println!("thumbnail updated");
        }
        Command::Background(args) => run_background(gateway, args).await?,
        Command::Slide(slide) => run_slide(gateway, slide.command).await?,
        Command::Element(element) => run_element(gateway, element.command, now).await?,
        Command::Preview(target) => {
            let editor = open(gateway, &target).await?;
            println!("{}  {}", editor.preview_route(), editor.player().counter());
        }
        Command::Export { id, out } => {
            let editor = Editor::open(gateway.clone(), &id, 0).await?;
            let html = export_html(editor.presentation());
            match out {
                Some(path) => std::fs::write(&path, html).map_err(|source| CliError::WriteFile { path, source })?,
                None => println!("{html}"),
            }
        }
        Command::Route { url } => {
            let route = Route::parse(&url);
            println!("{route}  (requires login: {})", route.requires_auth());
        }
    }
    Ok(())
}

async fn open(gateway: &Gateway, target: &Target) -> Result<Editor, CliError> {
    Ok(Editor::open(gateway.clone(), &target.id, target.slide).await?)
}

async fn run_background(gateway: &Gateway, args: BackgroundArgs) -> Result<(), CliError> {
    let fill = match (args.color, args.gradient, args.image) {
        (Some(color), _, _) => Background::solid(color),
        (_, Some(stops), _) => match stops.as_slice() {
            [start, end] => Background::gradient(start.clone(), end.clone(), args.direction),
            _ => return Err(CliError::MissingBackground),
        },
        (_, _, Some(image)) => Background::image(image),
        _ => return Err(CliError::MissingBackground),
    };
    let mut editor = open(gateway, &args.target).await?;
    let form = BackgroundForm::from_background(&fill, args.default);
    editor.set_background(&form).await?;
    let target = if args.default { "default" } else { "slide" };
    let kind = match fill.kind {
        BackgroundKind::Solid => "solid",
        BackgroundKind::Gradient => "gradient",
        BackgroundKind::Image => "image",
    };
    println!("{target} background set to {kind}");
    Ok(())
}

async fn run_slide(gateway: &Gateway, command: SlideSubcommand) -> Result<(), CliError> {
    match command {
        SlideSubcommand::Add { id } => {
            let mut editor = Editor::open(gateway.clone(), &id, 0).await?;
            let index = editor.create_slide().await?;
            println!("created slide {index}; continue at {}", editor.route());
        }
        SlideSubcommand::Delete(target) => {
            let mut editor = open(gateway, &target).await?;
            let index = editor.delete_slide(Instant::now()).await?;
            println!("deleted; continue at {}", editor.route().with_slide(index));
        }
        SlideSubcommand::Move { id, from, to } => {
            let mut editor = Editor::open(gateway.clone(), &id, 0).await?;
            editor.move_slide(from, to).await?;
            println!("moved slide {from} to {to}");
        }
    }
    Ok(())
}

async fn run_element(gateway: &Gateway, command: ElementSubcommand, now: Instant) -> Result<(), CliError> {
    match command {
        ElementSubcommand::Add { target, body } => {
            let mut editor = open(gateway, &target).await?;
            let id = add_element(&mut editor, body, now).await?;
            println!("{id}");
        }
        ElementSubcommand::Edit { target, element, body } => {
            // Edits replace content only; geometry goes through move/resize.
            if body.size().is_set() {
                return Err(CliError::SizeOnEdit);
            }
            let mut editor = open(gateway, &target).await?;
            edit_element(&mut editor, &element, body, now).await?;
            println!("edited {element}");
        }
        ElementSubcommand::Move { target, kind, element, x, y } => {
            let mut editor = open(gateway, &target).await?;
            let patch = ElementPatch { position: Some(Position::new(x, y)), size: None };
            editor.update_element(kind, &element, patch, now).await?;
            println!("moved {kind} {element}");
        }
        ElementSubcommand::Resize { target, kind, element, width, height } => {
            let mut editor = open(gateway, &target).await?;
            let patch = ElementPatch { position: None, size: Some(Size::new(width, height)) };
            editor.update_element(kind, &element, patch, now).await?;
            println!("resized {kind} {element}");
        }
        ElementSubcommand::Remove { target, kind, element } => {
            let mut editor = open(gateway, &target).await?;
            editor.remove_element(kind, &element).await?;
            println!("removed {kind} {element}");
        }
    }
    Ok(())
}

async fn add_element(editor: &mut Editor, body: BodyArgs, now: Instant) -> Result<ElementId, CliError> {
    let id = match body {
        BodyArgs::Text { text, font_size, color, font_family, size } => {
            let mut form = TextBoxForm::default();
            set(&mut form.text, text);
            set(&mut form.font_size, font_size);
            set(&mut form.color, color);
            set(&mut form.font_family, font_family);
            set(&mut form.width, size.width);
            set(&mut form.height, size.height);
            editor.add_text(&form, now).await?
        }
        BodyArgs::Image { url, file, alt, size } => {
            let mut form = ImageForm::default();
            apply_image(&mut form, url, file, alt, size).await?;
            editor.add_image(&form, now).await?
        }
        BodyArgs::Video { url, autoplay, size } => {
            let mut form = VideoForm::default();
            set(&mut form.url, url);
            set(&mut form.autoplay, autoplay);
            set(&mut form.width, size.width);
            set(&mut form.height, size.height);
            editor.add_video(&form, now).await?
        }
        BodyArgs::Code { content, file, font_size, size } => {
            let mut form = CodeForm::default();
            apply_code(&mut form, content, file, font_size, size)?;
            editor.add_code(&form, now).await?
        }
    };
    Ok(id)
}

async fn edit_element(editor: &mut Editor, id: &str, body: BodyArgs, now: Instant) -> Result<(), CliError> {
    let out_of_range = DeckError::SlideOutOfRange { index: editor.current_index(), len: editor.presentation().slides.len() };
    let slide = editor.current_slide().ok_or(out_of_range)?;
    let missing = |kind| DeckError::ElementNotFound { kind, id: id.to_owned() };
    match body {
        BodyArgs::Text { text, font_size, color, font_family, size: _ } => {
            let existing = slide.get::<TextBody>(id).ok_or_else(|| missing(ElementKind::Text))?;
            let mut form = TextBoxForm::from_element(existing);
            set(&mut form.text, text);
            set(&mut form.font_size, font_size);
            set(&mut form.color, color);
            set(&mut form.font_family, font_family);
            editor.edit_text(id, &form).await?;
        }
        BodyArgs::Image { url, file, alt, size } => {
            let existing = slide.get::<ImageBody>(id).ok_or_else(|| missing(ElementKind::Image))?;
            let mut form = ImageForm::from_element(existing);
            apply_image(&mut form, url, file, alt, size).await?;
            editor.edit_image(id, &form, now).await?;
        }
        BodyArgs::Video { url, autoplay, size: _ } => {
            let existing = slide.get::<VideoBody>(id).ok_or_else(|| missing(ElementKind::Video))?;
            let mut form = VideoForm::from_element(existing);
            set(&mut form.url, url);
            set(&mut form.autoplay, autoplay);
            editor.edit_video(id, &form, now).await?;
        }
        BodyArgs::Code { content, file, font_size, size } => {
            let existing = slide.get::<CodeBody>(id).ok_or_else(|| missing(ElementKind::Code))?;
            let mut form = CodeForm::from_element(existing);
            apply_code(&mut form, content, file, font_size, size)?;
            editor.edit_code(id, &form).await?;
        }
    }
    Ok(())
}

async fn apply_image(
    form: &mut ImageForm,
    url: Option<String>,
    file: Option<PathBuf>,
    alt: Option<String>,
    size: SizeArgs,
) -> Result<(), CliError> {
    if let Some(path) = file {
        form.file_data = Some(read_data_url(&path).await?);
    }
    set(&mut form.url, url);
    set(&mut form.description, alt);
    set(&mut form.width, size.width);
    set(&mut form.height, size.height);
    Ok(())
}

fn apply_code(
    form: &mut CodeForm,
    content: Option<String>,
    file: Option<PathBuf>,
    font_size: Option<f64>,
    size: SizeArgs,
) -> Result<(), CliError> {
    if let Some(path) = file {
        form.content = std::fs::read_to_string(&path).map_err(|source| CliError::ReadFile { path, source })?;
    }
    set(&mut form.content, content);
    set(&mut form.font_size, font_size);
    set(&mut form.width, size.width);
    set(&mut form.height, size.height);
    Ok(())
}

async fn read_data_url(path: &Path) -> Result<String, CliError> {
    data_url_from_file(path).await.map_err(|source| CliError::ReadFile { path: path.to_path_buf(), source })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
