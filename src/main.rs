mod config;
mod quiz;
mod views;

use std::sync::Arc;

use config::Config;
use dotenv::dotenv;
use log::{debug, info, warn};
use quiz::{
    assets::{AssetLocator, ResultImage},
    engine::{Diagnosis, QuizEngine},
    session::{Advance, Screen, Session, SessionController},
    Choice,
};
use teloxide::{
    dispatching::dialogue::InMemStorage,
    prelude::*,
    types::{ChatAction, InputFile, KeyboardButton, KeyboardMarkup, ParseMode},
};

type QuizDialogue = Dialogue<Session, InMemStorage<Session>>;
type HandlerError = Box<dyn std::error::Error + Send + Sync>;
type HandlerResult = Result<(), HandlerError>;

const START_BUTTON: &str = "診断をスタートする →";
const HISTORY_BUTTON: &str = "📜 過去の履歴を見る";
const BACK_BUTTON: &str = "戻る";
const HOME_BUTTON: &str = "🏠 トップへ";

#[tokio::main]
async fn main() -> HandlerResult {
    // Loaded before the logger so RUST_LOG can come from .env
    let env_file = dotenv();
    pretty_env_logger::init();
    if let Err(err) = env_file {
        debug!("No .env file loaded: {}", err);
    }

    let config = Config::from_env()?;
    info!("Starting room type bot...");

    let engine = Arc::new(QuizEngine::standard()?);
    info!(
        "Loaded {} questions and {} room types",
        engine.bank().len(),
        engine.types().len()
    );

    let controller = Arc::new(SessionController::new(engine, config.analyzing_delay));
    let assets = Arc::new(AssetLocator::new(
        config.assets_dir.clone(),
        config.placeholder_base.clone(),
    ));
    if !assets.dir().is_dir() {
        warn!(
            "Assets directory {} not found, results will use placeholder images",
            assets.dir().display()
        );
    }

    let bot = Bot::from_env();

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, InMemStorage<Session>, Session>()
            .map(|session: Session| session.screen())
            .branch(dptree::case![Screen::Home].endpoint(home))
            .branch(dptree::case![Screen::Quiz].endpoint(quiz))
            .branch(dptree::case![Screen::Result].endpoint(result))
            .branch(dptree::case![Screen::History].endpoint(history)),
    )
    .dependencies(dptree::deps![InMemStorage::<Session>::new(), controller, assets])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;

    Ok(())
}

async fn home(
    bot: Bot,
    dialogue: QuizDialogue,
    mut session: Session,
    msg: Message,
    controller: Arc<SessionController>,
) -> HandlerResult {
    match msg.text() {
        Some(START_BUTTON) => {
            session.start()?;
            debug!("Chat {} started a quiz", msg.chat.id);
            dialogue.update(session.clone()).await?;
            send_question(&bot, msg.chat.id, &session, controller.engine()).await?;
        }
        Some(HISTORY_BUTTON) => {
            session.view_history()?;
            dialogue.update(session.clone()).await?;
            send_history(&bot, msg.chat.id, &session).await?;
        }
        _ => send_home(&bot, msg.chat.id).await?,
    }
    Ok(())
}

async fn quiz(
    bot: Bot,
    dialogue: QuizDialogue,
    mut session: Session,
    msg: Message,
    controller: Arc<SessionController>,
    assets: Arc<AssetLocator>,
) -> HandlerResult {
    let engine = controller.engine();
    let text = msg.text().unwrap_or_default();

    if text == BACK_BUTTON {
        session.back()?;
        dialogue.update(session.clone()).await?;
        send_question(&bot, msg.chat.id, &session, engine).await?;
        return Ok(());
    }

    let choice = session
        .current_question(engine.bank())
        .and_then(|question| question.options.choice_for(text));
    let Some(choice) = choice else {
        // Not one of the offered buttons, ask again
        send_question(&bot, msg.chat.id, &session, engine).await?;
        return Ok(());
    };

    if session.cursor() >= engine.bank().last_index() {
        bot.send_message(msg.chat.id, views::ANALYZING_TEXT).await?;
        // Only cosmetic, so a failure here is ignored
        let _ = bot
            .send_chat_action(msg.chat.id, ChatAction::Typing)
            .await;
    }

    match answer_and_store(&controller, &dialogue, &mut session, choice).await? {
        None => send_question(&bot, msg.chat.id, &session, engine).await?,
        Some(diagnosis) => {
            info!("Chat {} finished a quiz", msg.chat.id);
            send_result(&bot, msg.chat.id, &diagnosis, &assets).await?;
        }
    }
    Ok(())
}

/// Applies the answer and stores the session before anything is sent, so a
/// failed send never loses the run. Returns the diagnosis once the run is
/// complete and recorded in the history.
async fn answer_and_store(
    controller: &SessionController,
    dialogue: &QuizDialogue,
    session: &mut Session,
    choice: Choice,
) -> Result<Option<Diagnosis>, HandlerError> {
    let diagnosis = match controller.answer(session, choice).await? {
        Advance::Next => None,
        Advance::Finished => Some(session.enter_result(controller.engine())?),
    };
    dialogue.update(session.clone()).await?;
    Ok(diagnosis)
}

async fn result(
    bot: Bot,
    dialogue: QuizDialogue,
    mut session: Session,
    msg: Message,
    controller: Arc<SessionController>,
    assets: Arc<AssetLocator>,
) -> HandlerResult {
    match msg.text() {
        Some(HOME_BUTTON) => {
            session.restart()?;
            dialogue.update(session).await?;
            send_home(&bot, msg.chat.id).await?;
        }
        _ => {
            let diagnosis = session.enter_result(controller.engine())?;
            dialogue.update(session).await?;
            send_result(&bot, msg.chat.id, &diagnosis, &assets).await?;
        }
    }
    Ok(())
}

async fn history(bot: Bot, dialogue: QuizDialogue, mut session: Session, msg: Message) -> HandlerResult {
    match msg.text() {
        Some(BACK_BUTTON) => {
            session.back()?;
            dialogue.update(session).await?;
            send_home(&bot, msg.chat.id).await?;
        }
        _ => send_history(&bot, msg.chat.id, &session).await?,
    }
    Ok(())
}

async fn send_home(bot: &Bot, chat_id: ChatId) -> HandlerResult {
    let keyboard = KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(START_BUTTON)],
        vec![KeyboardButton::new(HISTORY_BUTTON)],
    ]);
    bot.send_message(chat_id, views::HOME_TEXT)
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboard)
        .await?;
    Ok(())
}

async fn send_question(
    bot: &Bot,
    chat_id: ChatId,
    session: &Session,
    engine: &QuizEngine,
) -> HandlerResult {
    let Some(view) = session.question_view(engine.bank()) else {
        return Ok(());
    };

    let mut rows = vec![
        vec![KeyboardButton::new(view.question.options.a)],
        vec![KeyboardButton::new(view.question.options.b)],
    ];
    if view.number > 1 {
        rows.push(vec![KeyboardButton::new(BACK_BUTTON)]);
    }

    bot.send_message(chat_id, views::question_text(&view))
        .parse_mode(ParseMode::Html)
        .reply_markup(KeyboardMarkup::new(rows))
        .await?;
    Ok(())
}

async fn send_result(
    bot: &Bot,
    chat_id: ChatId,
    diagnosis: &Diagnosis,
    assets: &AssetLocator,
) -> HandlerResult {
    let photo = match assets.locate(&diagnosis.record) {
        ResultImage::File(path) => InputFile::file(path),
        ResultImage::Placeholder(url) => InputFile::url(url),
    };
    // The picture is decoration; the result itself still goes out if it fails
    if let Err(err) = bot
        .send_photo(chat_id, photo)
        .caption(views::result_caption(diagnosis))
        .parse_mode(ParseMode::Html)
        .await
    {
        warn!("Failed to send image for {}: {}", diagnosis.code, err);
    }

    bot.send_message(chat_id, views::result_text(diagnosis))
        .parse_mode(ParseMode::Html)
        .await?;

    bot.send_message(chat_id, views::chart_text(&diagnosis.chart))
        .parse_mode(ParseMode::Html)
        .reply_markup(KeyboardMarkup::new(vec![vec![KeyboardButton::new(HOME_BUTTON)]]))
        .await?;
    Ok(())
}

async fn send_history(bot: &Bot, chat_id: ChatId, session: &Session) -> HandlerResult {
    bot.send_message(chat_id, views::history_text(session.history()))
        .parse_mode(ParseMode::Html)
        .reply_markup(KeyboardMarkup::new(vec![vec![KeyboardButton::new(BACK_BUTTON)]]))
        .await?;
    Ok(())
}
