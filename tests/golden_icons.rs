use std::fs;
use std::path::PathBuf;

use bookmark_icons::{render_icon, ICON_SIZES};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_icons_match_fixtures() {
    for size in ICON_SIZES {
        let png = render_icon(size)
            .and_then(|canvas| canvas.encode_png())
            .expect("render icon");

        let expected_path = golden_path(&format!("icon{size}.png.hex"));
        if std::env::var("UPDATE_GOLDENS").is_ok() {
            // write hex of the full PNG byte stream
            fs::create_dir_all("tests/goldens/expected").ok();
            fs::write(&expected_path, hex::encode(&png)).expect("write golden");
            println!("Updated golden: {:?}", expected_path);
            continue;
        }

        if !expected_path.exists() {
            println!(
                "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
                expected_path
            );
            continue;
        }

        let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
        let exp_bytes = hex::decode(exp.trim()).expect("invalid hex in golden");
        assert_eq!(png, exp_bytes, "icon{size}.png drifted from its golden");
    }
}
