use subwire::{config::get_or_init_config, form::structs::UiState, App, Result};

use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // We have a different logging mechanism for production
    #[cfg(not(debug_assertions))]
    {
        subwire::init_production_tracing()
    }
    #[cfg(debug_assertions)]
    {
        subwire::init_dbg_tracing();
    }

    let config = get_or_init_config();
    let mut app = App::build_from_config(config)?;

    info!("Type an email address and press enter to subscribe.");

    // The page is interactive: keep forwarding submit events to the
    // controller until the form is consumed or the input ends.
    while let Some(line) = read_input_line().await? {
        app.controller.set_email_input(line.trim());

        match app.controller.submit().await {
            UiState::Succeeded => {
                info!("Subscribed. The form is consumed.");
                break;
            }
            UiState::Failed => info!("Submission failed. Try again."),
            state => info!("Form is {}.", state.as_ref()),
        }
    }

    Ok(())
}

/// Reads one line from stdin without blocking the runtime, `None` on EOF.
async fn read_input_line() -> Result<Option<String>> {
    let (read, buf) = tokio::task::spawn_blocking(|| {
        let mut buf = String::new();
        std::io::stdin().read_line(&mut buf).map(|read| (read, buf))
    })
    .await??;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(buf))
}
