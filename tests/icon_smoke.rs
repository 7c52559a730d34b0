use bookmark_icons::render_icon;

#[test]
fn smoke_render_default_icon() {
    let canvas = render_icon(128).unwrap();
    assert_eq!(canvas.width(), 128);
    assert_eq!(canvas.height(), 128);
}

#[test]
fn smoke_encode_png() {
    let png = render_icon(16).unwrap().encode_png().unwrap();
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]));
}
