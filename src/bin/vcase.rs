use vcase::ui::{MessageBlock, NoticeLevel, OutputMode, PlainRenderer, Renderer};
use vcase::{parse_command, print_usage, Command};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let output_mode = OutputMode::from_env();
    let cmd = match parse_command(args) {
        Ok(cmd) => cmd,
        Err(err) => {
            let mut renderer = PlainRenderer::stderr(output_mode);
            let _ = renderer.error_block(
                &MessageBlock::new("Invalid command arguments", err.to_string())
                    .with_hint("Run `vcase --help` to see supported command forms"),
            );
            print_usage();
            std::process::exit(2);
        }
    };

    let is_run = matches!(cmd, Command::Run(_));
    match cmd {
        Command::Help => {
            print_usage();
        }
        _ => match vcase::runner::run_command(cmd) {
            Ok(output) => {
                if !output.trim().is_empty() {
                    let mut renderer = PlainRenderer::stdout(output_mode);
                    let _ = renderer.text(&output);
                }
                if is_run {
                    let mut renderer = PlainRenderer::stderr(output_mode);
                    let _ = renderer.notice(NoticeLevel::Success, "case command completed");
                }
            }
            Err(err) => {
                let mut renderer = PlainRenderer::stderr(output_mode);
                let _ =
                    renderer.error_block(&MessageBlock::new("Case action failed", err.to_string()));
                std::process::exit(1);
            }
        },
    }
}
