use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn cli_prints_all_blocks_in_order() {
    let mut cmd = cargo_bin_cmd!("blockdec");

    cmd.assert().success().code(0).stdout(
        r#"Hash: 0000006c3a436500b20c0c80f5dae66e1233d84da4ddd5af2987cfdb1562eb9f
  First 3 bytes: 0
  First 4 bytes: 108
  First 8 bytes: 464833963264

Hash: 0000010214efc2d0f09b4b0bce1f1f5af7df428471031886bff73119c45cdcbc
  First 3 bytes: 1
  First 4 bytes: 258
  First 8 bytes: 1108452819664

Hash: 000002d7a7e5d7bb05b43c21aef385b934c61d3a7605c0829c35defb490a651c
  First 3 bytes: 2
  First 4 bytes: 727
  First 8 bytes: 3125258082235

"#,
    );
}

#[test]
fn cli_writes_nothing_to_stderr_on_success() {
    let mut cmd = cargo_bin_cmd!("blockdec");

    cmd.assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn cli_rejects_positional_arguments() {
    let mut cmd = cargo_bin_cmd!("blockdec");
    cmd.arg("deadbeefdeadbeef");

    cmd.assert().failure();
}
