use serde_json::json;
use subjectflow::prelude::*;
use subjectflow::subject_runner::RunEventKind;

/// Suite de demostración: subject valor, subject factory anidado y
/// propiedades que resuelven contra el subject más cercano.
fn demo_suite() -> Result<subjectflow::subject_runner::Suite, subjectflow::subject_runner::RunnerError> {
    SuiteRunner::define("Subjects", |s| {
        subject("user", json!({"name": "ada", "roles": 2}))?;
        property("name")?;

        s.it("exposes the subject", |ctx| ensure(ctx.contains_key("user"), "user missing"));
        s.it("projects name", |ctx| ensure(ctx.get("name") == Some(&json!("ada")), "name mismatch"));

        s.describe("nested factory", |n| {
            subject("team",
                    factory(|ctx| {
                        let name = ctx.get("name").cloned().unwrap_or_default();
                        Ok(json!({"members": [name], "roles": 5}))
                    }))?;
            property_as("roles", "teamRoles")?;

            n.it("reads from the nearest subject", |ctx| {
                ensure(ctx.get("teamRoles") == Some(&json!(5)), "teamRoles should come from team")
            });
            n.it("keeps two records stacked", |ctx| {
                ensure(ctx.subjects().map_or(0, <[_]>::len) == 2, "expected two subjects")
            });
            Ok(())
        })?;

        s.describe("after nested", |a| {
            a.it("drops the nested subject", |ctx| {
                ensure(!ctx.contains_key("team") && !ctx.contains_key("teamRoles"), "team leaked")
            });
            Ok(())
        })
    })
}

fn main() {
    // Cargar variables de entorno desde .env si existe (SUBJECTFLOW_GREP / SUBJECTFLOW_BAIL)
    let _ = dotenvy::dotenv();

    let root = match demo_suite() {
        Ok(r) => r,
        Err(e) => { eprintln!("[subjectflow] definición inválida: {e}"); std::process::exit(3); }
    };
    println!("[subjectflow] demo `{}` con {} tests", root.title, root.test_count());

    let mut runner = SuiteRunner::new(root).with_config(RunnerConfig::from_env());
    let report = runner.run();
    let events = runner.events_for(report.run_id);
    let codes: String = events.iter().map(|e| e.kind.code()).collect();
    println!("[subjectflow] secuencia de eventos: {codes}");
    for e in &events {
        if let RunEventKind::TestFailed { title, error, .. } = &e.kind {
            eprintln!("[subjectflow] FAIL {title}: {error}");
        }
    }
    println!("[subjectflow] passed={} failed={} skipped={}", report.passed, report.failed, report.skipped);
    if !report.is_success() {
        std::process::exit(1);
    }
}
