fn main() {
    let date = time::OffsetDateTime::now_utc().date();
    println!("cargo:rustc-env=BOPJSON_BUILD_DATE={}", date);
}
