use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::conversation::Conversation;
use crate::gateway::CompletionGateway;

const EXIT_COMMAND: &str = "salir";

fn is_exit_command(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_COMMAND)
}

pub async fn run_repl<G: CompletionGateway>(gateway: &G) -> Result<()> {
    let mut conversation = Conversation::new();

    println!("Chat iniciado. Escribe tu mensaje (o '{EXIT_COMMAND}' para terminar).");

    loop {
        print!("Tú: ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        let read = io::stdin()
            .read_line(&mut input)
            .context("Failed to read stdin")?;
        if read == 0 {
            println!();
            println!("Saliendo...");
            break;
        }

        let prompt = input.trim();
        if prompt.is_empty() {
            continue;
        }
        if is_exit_command(prompt) {
            println!("Saliendo...");
            break;
        }

        match conversation.run_turn(gateway, prompt).await {
            Ok(reply) => println!("Asistente: {reply}\n"),
            Err(err) => {
                eprintln!("Error al contactar el servicio: {err:#}");
                eprintln!(
                    "Sugerencia: revisa endpoint, deployment, api version y conectividad. \
                     No se imprimen secretos."
                );
            }
        }
    }

    Ok(())
}
