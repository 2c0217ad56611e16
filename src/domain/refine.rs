//! プロンプト改善リクエストと、改善指示プロンプトの組み立て

/// thumbs down + フィードバック本文から作られる改善リクエスト（1 回だけ消費される）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRequest {
    pub user_message: String,
    pub system_prompt: String,
    pub output: String,
    pub feedback: String,
}

/// 4 つの入力を """ 区切りのセクションにそのまま埋め込んだ改善指示プロンプトを組み立てる。
/// 応答には改善後のシステムプロンプト本文のみを返すよう指示する（引用符・説明なし）。
pub fn build_refinement_prompt(
    user_message: &str,
    system_prompt: &str,
    output: &str,
    feedback: &str,
) -> String {
    format!(
        r#"You are an expert in designing effective system prompts for LLMs. You will analyze the following interaction and suggest an improved system prompt.

ORIGINAL USER MESSAGE:
"""
{user_message}
"""

ORIGINAL SYSTEM PROMPT:
"""
{system_prompt}
"""

ORIGINAL OUTPUT:
"""
{output}
"""

USER FEEDBACK ON WHY THIS OUTPUT IS NOT SATISFACTORY:
"""
{feedback}
"""

Based on the user's feedback, please provide an improved system prompt that would generate a better response to the original user message.
Return ONLY the improved system prompt text, without any explanations, additional context, or quotation marks."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_all_four_inputs_verbatim() {
        let p = build_refinement_prompt(
            "Write a haiku about rain",
            "You are a helpful assistant...",
            "Soft rain falls at dawn...",
            "too short",
        );
        assert!(p.contains("ORIGINAL USER MESSAGE:\n\"\"\"\nWrite a haiku about rain\n\"\"\""));
        assert!(p.contains("ORIGINAL SYSTEM PROMPT:\n\"\"\"\nYou are a helpful assistant...\n\"\"\""));
        assert!(p.contains("ORIGINAL OUTPUT:\n\"\"\"\nSoft rain falls at dawn...\n\"\"\""));
        assert!(p.contains(
            "USER FEEDBACK ON WHY THIS OUTPUT IS NOT SATISFACTORY:\n\"\"\"\ntoo short\n\"\"\""
        ));
    }

    #[test]
    fn test_prompt_asks_for_bare_replacement_text() {
        let p = build_refinement_prompt("m", "s", "o", "f");
        assert!(p.contains("Return ONLY the improved system prompt text"));
        assert!(p.contains("without any explanations, additional context, or quotation marks"));
    }

    #[test]
    fn test_prompt_keeps_multiline_inputs() {
        let p = build_refinement_prompt("line1\nline2", "s", "o", "f");
        assert!(p.contains("\"\"\"\nline1\nline2\n\"\"\""));
    }
}
