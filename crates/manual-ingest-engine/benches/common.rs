// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_manual(rooms: usize) -> String {
    let mut content = String::from("# [Qterw-X-1] 벤치마크 매뉴얼\n\n## [1. 개요]\n\n개요 문단.\n\n");
    content.push_str("## [2. 진입 방법]\n\n- 진입:\n  : 문을 연다.\n\n## [3. 탐사 가이드]\n\n");

    for room in 0..rooms {
        content.push_str(&format!("- {room}-1. 방 {room}:\n"));
        content.push_str("  : 설명 한 줄\n");
        content.push_str(&format!("  - {room}-1-1. 벽장\n"));
        content.push_str("    : [열람 제한] 내용\n");
        content.push_str("  <aside>\n  **주의**\n  : 뒤돌아보지 말 것\n  </aside>\n");
    }

    content.push_str("\n## [4. 특이사항]\n\n- 담당: A조\n");
    content
}

#[allow(dead_code)]
pub fn generate_deep_guide(depth: usize) -> Vec<String> {
    (0..depth)
        .map(|level| format!("{}- {level}-1. 단계", " ".repeat(level * 2)))
        .collect()
}
