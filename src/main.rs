use lumina::core::cli::CliPaths;
use lumina::core::context::AppContext;
use lumina::logging::LogTarget;
use lumina::prompter::flows::main_flow::MainFlow;
use lumina::prompter::prompter::Prompter;

fn main() {
    let paths = match CliPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let mut ctx = match AppContext::new_with_paths(paths) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let outcome = Prompter::stdin().run(&mut MainFlow::new(&mut ctx));

    if let Err(err) = outcome {
        ctx.logger
            .error(format!("{err}"), LogTarget::ConsoleAndFile);
    }
}
