fn main() {
    multiversx_sc_meta_lib::cli_main::<vote_receipt_token::AbiProvider>();
}
