use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use voicerelay::client::{GenerationState, ProxyClient, Session};

#[derive(Parser, Debug)]
#[command(name = "voicerelay-cli")]
#[command(about = "Terminal client for the voicerelay speech proxy")]
struct Args {
    /// Base URL of the proxy service
    #[arg(long, env = "VOICERELAY_SERVER", default_value = "http://localhost:5000")]
    server: String,

    /// Print the available voices and exit
    #[arg(long)]
    list_voices: bool,

    /// Text to synthesize
    #[arg(long)]
    text: Option<String>,

    /// Voice id to use (defaults to the first catalog entry)
    #[arg(long)]
    voice: Option<String>,

    /// Save the generated clip to FILE
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = Session::DOWNLOAD_FILENAME
    )]
    output: Option<PathBuf>,

    /// Play the generated clip on the default audio device
    #[cfg(feature = "playback")]
    #[arg(long)]
    play: bool,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let client = ProxyClient::new(&args.server);
    let mut session = Session::new();

    // Startup sequence: fetch the catalog once
    session.load_voices(&client).await;
    if let Some(message) = session.error() {
        eprintln!("{message}");
    }

    if args.list_voices {
        for voice in session.voices() {
            println!(
                "{}\t{} ({}) - {}",
                voice.voice_id, voice.name, voice.language, voice.gender
            );
        }
        return Ok(());
    }

    let text = args
        .text
        .context("--text is required unless --list-voices is given")?;
    session.set_text(text);

    if let Some(voice) = &args.voice {
        session.select_voice(voice)?;
    }

    session.generate(&client).await?;

    match session.state() {
        GenerationState::Ready => {
            let size = session.audio().map(|audio| audio.len()).unwrap_or(0);
            println!("Generated {size} bytes of audio");

            #[cfg(feature = "playback")]
            if args.play {
                if let Some(audio) = session.audio() {
                    voicerelay::client::playback::play_clip(audio)?;
                }
            }

            if let Some(path) = &args.output {
                session.save_audio(path)?;
                println!("Saved {}", path.display());
            }
        }
        GenerationState::Failed => {
            anyhow::bail!(session
                .error()
                .unwrap_or("speech generation failed")
                .to_string());
        }
        _ => {}
    }

    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
