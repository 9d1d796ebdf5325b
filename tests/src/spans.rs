#![cfg(test)]
use std::net::IpAddr;

use anyhow::Result;
use netspan_core::{Bindings, Ipv4Pattern, IpRange, MacAddr, Span, Subnet, ip};

use super::util::{v4, v6};

/*************************************************************
              Subnets and ranges working together
**************************************************************/

#[test]
fn a_subnet_and_its_range_agree_on_everything() -> Result<()> {
    let net: Subnet = "10.20.30.0/24".parse()?;
    let range: IpRange = IpRange::from(net);

    assert_eq!(Span::first(&net), range.first());
    assert_eq!(Span::last(&net), range.last());
    assert_eq!(net.count(), range.count());
    assert!(net.contains_span(&range) && range.contains_span(&net));
    Ok(())
}

#[test]
fn ranges_can_straddle_subnet_edges() -> Result<()> {
    let range: IpRange = "10.0.0.250..10.0.1.5".parse()?;
    let lower: Subnet = "10.0.0.0/24".parse()?;
    let upper: Subnet = "10.0.1.0/24".parse()?;

    assert!(!lower.contains_span(&range), "range leaks into the next block");
    assert!(!upper.contains_span(&range));
    assert_eq!(range.count(), 12);

    let addrs: Vec<IpAddr> = range.iter().collect();
    assert_eq!(addrs[5], v4(10, 0, 0, 255));
    assert_eq!(addrs[6], v4(10, 0, 1, 0), "iteration carries across octets");
    Ok(())
}

#[test]
fn slicing_reaches_deep_into_a_wide_block_instantly() -> Result<()> {
    let net: Subnet = "10.0.0.0/16".parse()?;
    // 4096 addresses in, without stepping through the first 4095.
    let window: Vec<IpAddr> = net.slice(4096, 3);
    assert_eq!(
        window,
        vec![v4(10, 0, 16, 0), v4(10, 0, 16, 1), v4(10, 0, 16, 2)]
    );

    let tail: Vec<IpAddr> = net.slice(net.count() - 1, 8);
    assert_eq!(tail, vec![v4(10, 0, 255, 255)], "tail slice clamps");
    Ok(())
}

#[test]
fn v6_blocks_enumerate_lazily() -> Result<()> {
    let net: Subnet = "2001:db8::/64".parse()?;
    assert_eq!(net.count(), 1u128 << 64);

    let head: Vec<IpAddr> = net.iter().take(2).collect();
    assert_eq!(head, vec![v6("2001:db8::"), v6("2001:db8::1")]);

    let back = net.iter().next_back();
    assert_eq!(back, Some(v6("2001:db8::ffff:ffff:ffff:ffff")));
    Ok(())
}

#[test]
fn membership_agrees_with_enumeration() -> Result<()> {
    let net: Subnet = "10.0.0.8/29".parse()?;
    let range: IpRange = "10.0.0.10..10.0.0.13".parse()?;

    // Probe a window wider than both blocks on each side.
    for d in 0u8..24 {
        let candidate = v4(10, 0, 0, d);
        assert_eq!(
            net.contains(&candidate),
            net.iter().any(|a| a == candidate),
            "subnet membership of {candidate} must match enumeration"
        );
        assert_eq!(
            range.contains(&candidate),
            range.iter().any(|a| a == candidate),
            "range membership of {candidate} must match enumeration"
        );
    }
    Ok(())
}

#[test]
fn slices_are_contiguous_sublists_of_the_enumeration() -> Result<()> {
    let range: IpRange = "10.0.0.0..10.0.0.31".parse()?;
    let oracle: Vec<IpAddr> = range.iter().collect();
    for (start, len) in [(0u128, 4usize), (7, 3), (30, 10), (32, 1)] {
        assert_eq!(
            range.slice(start, len),
            oracle
                .iter()
                .skip(start as usize)
                .take(len)
                .copied()
                .collect::<Vec<IpAddr>>(),
            "slice({start}, {len}) must equal the sublist"
        );
    }
    Ok(())
}

#[test]
fn stepping_walks_off_neither_end() {
    let top = v4(255, 255, 255, 255);
    let next = ip::next(&top);
    assert!(next.is_err(), "no successor past {top}");

    let bottom = v6("::");
    assert!(ip::prev(&bottom).is_err(), "no predecessor before ::");

    // In-range stepping matches enumeration order.
    let range: IpRange = "10.0.0.3..10.0.0.5".parse().unwrap();
    let mut cursor = range.first();
    for expected in range.iter().skip(1) {
        cursor = ip::next(&cursor).unwrap();
        assert_eq!(cursor, expected);
    }
}

/*************************************************************
               Template scans over enumerations
**************************************************************/

#[test]
fn template_scan_over_a_block() -> Result<()> {
    let net: Subnet = "192.168.4.0/30".parse()?;
    let gateway: Ipv4Pattern = "192.168.x.1".parse()?;

    let mut hits: Vec<(IpAddr, u8)> = Vec::new();
    for addr in net.iter() {
        if let IpAddr::V4(v4) = addr {
            if let Some(bound) = gateway.captures(v4) {
                hits.push((addr, bound["x"]));
            }
        }
    }
    assert_eq!(hits, vec![(v4(192, 168, 4, 1), 4)]);
    Ok(())
}

#[test]
fn pinned_template_scan_follows_the_subnet_octet() -> Result<()> {
    let pattern: Ipv4Pattern = "10.^site.0._".parse()?;
    let site_seven = Bindings::from([("site".to_string(), 7u8)]);

    let net: Subnet = "10.7.0.0/30".parse()?;
    let matched = net.iter().all(|addr| match addr {
        IpAddr::V4(v4) => pattern.matches_pinned(v4, &site_seven),
        IpAddr::V6(_) => false,
    });
    assert!(matched, "every address of 10.7.0.0/30 lies under site 7");

    let other: Subnet = "10.8.0.0/30".parse()?;
    let crossed = other
        .iter()
        .any(|addr| matches!(addr, IpAddr::V4(v4) if pattern.matches_pinned(v4, &site_seven)));
    assert!(!crossed, "site 8 addresses must not match the pin");
    Ok(())
}

/*************************************************************
                    Synthetic MAC fleets
**************************************************************/

#[test]
fn generated_fleet_stays_local_and_under_its_prefix() -> Result<()> {
    let seed: MacAddr = "06:AA:07:00:00:00".parse()?;
    for _ in 0..16 {
        let mac = MacAddr::random_with_prefix(seed, 24)?;
        assert!(mac.is_local(), "{mac} must keep the seed's local bit");
        assert_eq!(mac.octets()[..3], seed.octets()[..3], "vendor half fixed");
    }
    Ok(())
}
