use text_buffer::TextBuffer;

fn main() {
    let mut buffer = TextBuffer::new("#Notes\n*buy* milk\ncall _mum_\nfix bike\n");

    // Move the last item up under the heading.
    let clip = buffer.cut(3, 3).unwrap();
    buffer.merge(1, clip).unwrap();
    assert_eq!(
        buffer.dump(false),
        "#Notes\nfix bike\n*buy* milk\ncall _mum_\n"
    );

    // Bullet the to-do items (this clears history).
    buffer.add_prefix(1, 3, "- ").unwrap();
    assert!(!buffer.can_undo());

    buffer.format_rich_text();
    print!("{}", buffer.dump(true));

    for m in buffer.search("i") {
        println!("'i' at line {}, byte {}", m.line, m.column);
    }
}
