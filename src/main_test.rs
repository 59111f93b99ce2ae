use client::session::MemoryTokenStore;

use super::*;

fn offline_gateway() -> Gateway {
    let config = ClientConfig { backend_url: "http://127.0.0.1:9".to_owned(), ..ClientConfig::default() };
    let backend = HttpBackend::new(&config).unwrap();
    Gateway::new(Arc::new(backend), Arc::new(MemoryTokenStore::with_token("tok")))
}

fn element_command(args: &[&str]) -> ElementSubcommand {
    let cli = Cli::try_parse_from(["presto", "element"].into_iter().chain(args.iter().copied())).unwrap();
    match cli.command {
        Command::Element(element) => element.command,
        other => panic!("unexpected command {other:?}"),
    }
}

#[tokio::test]
async fn edit_with_size_is_rejected_before_any_request() {
    let command = element_command(&["edit", "p1", "--element", "e1", "text", "--width", "50"]);
    let err = run_element(&offline_gateway(), command, Instant::now()).await.unwrap_err();
    assert!(matches!(err, CliError::SizeOnEdit));
}

#[test]
fn add_accepts_size() {
    let command = element_command(&["add", "p1", "code", "--width", "50", "--height", "20"]);
    let ElementSubcommand::Add { body, .. } = command else { panic!("expected add") };
    assert!(body.size().is_set());
}
