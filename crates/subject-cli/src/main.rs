use subject_runner::{load_suite, RunEventKind, RunnerConfig, SuiteRunner};

fn main() {
    // Cargar .env si existe para obtener SUBJECTFLOW_GREP / SUBJECTFLOW_BAIL
    let _ = dotenvy::dotenv();
    // CLI mínima: `subject-cli run <suite.json> [--grep <TXT>] [--bail] [--events]`
    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 3 && args[1] == "run" {
        let path = args[2].clone();
        let mut config = RunnerConfig::from_env();
        let mut show_events = false;
        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--grep" => {
                    i += 1;
                    if i < args.len() { config = config.with_grep(args[i].clone()); }
                }
                "--bail" => config = config.with_bail(true),
                "--events" => show_events = true,
                other => { eprintln!("[subjectflow] argumento ignorado: {other}"); }
            }
            i += 1;
        }

        let spec = match load_suite(&path) {
            Ok(s) => s,
            Err(e) => { eprintln!("[subjectflow] {e}"); std::process::exit(3); }
        };
        let root = match spec.build() {
            Ok(r) => r,
            Err(e) => { eprintln!("[subjectflow] definición inválida: {e}"); std::process::exit(3); }
        };
        println!("[subjectflow] suite `{}` ({} tests)", root.title, root.test_count());

        let mut runner = SuiteRunner::new(root).with_config(config);
        let report = runner.run();
        for event in runner.events_for(report.run_id) {
            match &event.kind {
                RunEventKind::TestPassed { title } => println!("  ok    {title}"),
                RunEventKind::TestFailed { title, error, context } => {
                    println!("  FAIL  {title}: {error} [ctx {}]", context.get(..12).unwrap_or(context))
                }
                RunEventKind::TestSkipped { title, reason } => println!("  skip  {title} ({reason})"),
                RunEventKind::HookFailed { suite, phase, error } => {
                    println!("  HOOK  {} de `{suite}`: {error}", phase.hook_name())
                }
                _ => {}
            }
            if show_events {
                match serde_json::to_string(&event) {
                    Ok(line) => println!("{line}"),
                    Err(e) => eprintln!("[subjectflow] evento no serializable: {e}"),
                }
            }
        }
        println!("[subjectflow] run={} passed={} failed={} skipped={} hook_failures={}",
                 report.run_id, report.passed, report.failed, report.skipped, report.hook_failures);
        std::process::exit(if report.is_success() { 0 } else { 1 });
    } else {
        eprintln!("Uso: subject-cli run <suite.json> [--grep <TXT>] [--bail] [--events]");
        std::process::exit(2);
    }
}
