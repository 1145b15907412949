//! Live provider calls. Run with `KEWEN_GEMINI__API_KEY` / `KEWEN_DEEPSEEK__API_KEY`
//! set and `--ignored`.

use kw_ai::tasks::check_typos;
use kw_ai::{Completion, CompletionClient};
use kw_config::KewenConfig;
use kw_core::enums::AiModel;

fn client() -> CompletionClient {
    let config = KewenConfig::load_with_dotenv().expect("config should load");
    CompletionClient::from_config(&config).expect("client should build")
}

#[tokio::test]
#[ignore = "requires network and a Gemini API key"]
async fn gemini_replies() {
    let reply = client()
        .complete(AiModel::Gemini, "Reply with the single word: ok")
        .await
        .unwrap();
    assert!(!reply.trim().is_empty());
}

#[tokio::test]
#[ignore = "requires network and a DeepSeek API key"]
async fn deepseek_typo_check() {
    let check = check_typos(&client(), AiModel::DeepSeek, "他己經走了。")
        .await
        .unwrap();
    assert!(!check.response.is_empty());
}
