//! Client session loop.

use std::thread;

use futures_util::{SinkExt, StreamExt};
use roomchat_shared::{MessageEnvelope, Route, time::now_millis};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::{
    api::RoomApi,
    config::ClientArgs,
    error::ClientError,
    session::{Command, RoomView},
};

const PROMPT: &str = "> ";

/// Join (or create) a room and chat until `/quit`, end of input, or the
/// server closes the connection.
pub async fn run(args: ClientArgs) -> Result<(), ClientError> {
    let api = RoomApi::new(args.base_url());
    let room_id = match &args.room {
        Some(room_id) => {
            if !api.room_exists(room_id).await? {
                return Err(ClientError::RoomNotFound(room_id.clone()));
            }
            room_id.clone()
        }
        None => api.create_room().await?,
    };
    let route = Route::room(room_id.as_str());
    println!("Joined room {room_id}");
    println!("Share this link: {}{}", args.base_url(), route);

    let ws_url = args.ws_url(&room_id)?;
    tracing::info!("Connecting to {}", ws_url);
    let (ws, _) = connect_async(ws_url.as_str()).await?;
    let (mut writer, mut reader) = ws.split();
    let wire_format = args.wire_format;

    let announce = MessageEnvelope::name(None, args.name.as_str());
    writer
        .send(Message::text(wire_format.encode_request(&announce)))
        .await?;

    let mut input = spawn_input_reader();
    let mut view = RoomView::new(args.name.as_str());

    loop {
        tokio::select! {
            incoming = reader.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    for line in view.receive(wire_format, text.as_str(), now_millis()) {
                        println!("{line}");
                    }
                }
                Some(Ok(Message::Close(_))) | None => {
                    println!("* connection closed by server");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
            },
            line = input.recv() => {
                let line = match line {
                    Some(Ok(line)) => line,
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                };

                let command = Command::parse(&line);
                match &command {
                    Command::Quit => break,
                    Command::Ignore(Some(hint)) => println!("{hint}"),
                    Command::Rename(name) => view.rename_self(name.as_str(), now_millis()),
                    Command::Say(_) | Command::Ignore(None) => {}
                }
                if let Some(envelope) = command.to_envelope() {
                    writer
                        .send(Message::text(wire_format.encode_request(&envelope)))
                        .await?;
                }
            }
        }
    }

    if let Err(e) = writer.send(Message::Close(None)).await {
        tracing::debug!("Close frame not sent: {}", e);
    }
    tracing::info!("Left room {} as {}", room_id, view.own_name());
    Ok(())
}

/// Read prompt lines on a dedicated thread.
///
/// The channel closes on Ctrl-C or Ctrl-D. The thread is not joined: it may
/// still be blocked in `readline` when the session ends.
fn spawn_input_reader() -> mpsc::UnboundedReceiver<Result<String, ReadlineError>> {
    let (tx, rx) = mpsc::unbounded_channel();

    thread::spawn(move || {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                let _ = tx.send(Err(e));
                return;
            }
        };

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    if tx.send(Ok(line)).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => {
                    let _ = tx.send(Err(e));
                    break;
                }
            }
        }
    });

    rx
}
