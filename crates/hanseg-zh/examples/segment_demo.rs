// Minimal demonstration of the segmentation engine with an inline
// dictionary.
//
// Run: cargo run -p hanseg-zh --example segment_demo

use hanseg_zh::{Segmenter, indexing};

fn main() {
    let seg = Segmenter::new(
        ["北京", "大学", "欢迎", "学生"],
        ["生"],
    );

    let texts = [
        "北京大学欢迎你",
        "大学生在北京，email: foo@bar.com",
        "abc123测试",
    ];

    for text in texts {
        println!("{text}");
        println!("  tokens: {:?}", seg.segment(text));
        println!("  index:  {:?}", indexing::index_terms(&seg, text));
    }
}
