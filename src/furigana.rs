// 日本語の平文に振り仮名を付けて HTML にする
//
// 形態素解析（分かち書きと読みの推定）は Lindera に委ねる：
// - 分かち書きの粒度は辞書側が決める
// - 読みが得られない語（未知語など）にはルビを振らない
// - 片仮名語は読みが自明なのでルビを振らない

pub mod annotator;
pub mod renderer;
pub mod tokenizer;
