use clap::Parser;

/// 命令行参数：没有任何选项，只有 `-h/--help`。
///
/// 其他参数一律是用法错误（clap 打印用法到 stderr 并以 2 退出）。
#[derive(Parser, Debug)]
#[command(name = "wtf")]
#[command(about = "Simple interactive command line fuzzy finder.")]
#[command(
    long_about = "Simple interactive command line fuzzy finder.\n\
                  Designed to take any kind of new-line separated list from STDIN."
)]
#[command(disable_version_flag = true)]
pub struct Cli {}
