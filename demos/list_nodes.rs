use ctyun_driver::{
    CtyunClientBuilder, CtyunNodeDriver, CtyunResult, DEFAULT_ZONE_ID, NodeDriver, Page,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> CtyunResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ctyun_driver=debug")),
        )
        .init();
    dotenvy::dotenv().ok();

    let driver = CtyunNodeDriver::new(CtyunClientBuilder::from_env()?.build()?);

    let mut page = Page::new(1, 20);
    loop {
        let nodes = driver.list_nodes(page).await?;
        for node in &nodes {
            println!(
                "{} {} state={} public={:?} private={:?}",
                node.id, node.name, node.state, node.public_ips, node.private_ips
            );
        }
        if nodes.len() < page.page_size as usize {
            break;
        }
        page = page.next();
    }

    for volume in driver.list_volumes(DEFAULT_ZONE_ID, Page::VOLUMES).await? {
        println!(
            "{} {} {}GB state={} vm={:?}",
            volume.id, volume.name, volume.size, volume.state, volume.extra.vm_name
        );
    }

    Ok(())
}
