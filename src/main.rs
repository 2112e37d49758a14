use alphabet_tutor::app::App;
use alphabet_tutor::engine::config::Config;
use alphabet_tutor::speech::SpeechSession;
use alphabet_tutor::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging is optional; the screen works without it
    let _ = alphabet_tutor::logging::init();

    let config = Config::default();
    let mut tui = TuiManager::new()?;

    // The speech engine lives exactly as long as the screen: `app` owns the
    // session and is dropped before `tui` restores the terminal.
    let speech = SpeechSession::acquire(&config.speech);
    let mut app = App::new(config, Box::new(speech));

    tui.run_event_loop(&mut app)?;

    Ok(())
}
