use anyhow::Result;
use finals_csv_converter::utils::logging;
use finals_csv_converter::{App, Config};

fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 第一个命令行参数为输入文件，缺省时交互式询问
    let input_arg = std::env::args().nth(1);

    App::initialize(config)?.run(input_arg)?;

    Ok(())
}
