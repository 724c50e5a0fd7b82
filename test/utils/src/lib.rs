pub fn login_fixture() -> &'static str {
    return r#"
{
  "status": "OK",
  "statusCode": 200,
  "data": {
    "token": "eyJhbGciOiJIUzI1NiJ9.c2Vzc2lvbg.qQXFiCmU"
  },
  "meta": {}
}
"#
    .trim();
}

pub fn devices_fixture() -> &'static str {
    return r#"
{
  "status": "OK",
  "statusCode": 200,
  "data": {
    "devices": [
      {
        "id": "probe-1",
        "temperature": {
          "internal": 36.66,
          "ambient": 151.2
        },
        "cook": {
          "id": "cook-1",
          "name": "Brisket",
          "state": "Cooking",
          "temperature": {
            "target": 90.0,
            "peak": 38.5
          },
          "time": {
            "elapsed": 125,
            "remaining": -1
          }
        },
        "updated_at": 1700000000
      },
      {
        "id": "probe-2",
        "temperature": {
          "internal": 21.0,
          "ambient": 21.4
        },
        "cook": null,
        "updated_at": 1700000000
      }
    ]
  },
  "meta": {}
}
"#
    .trim();
}

pub fn empty_devices_fixture() -> &'static str {
    return r#"
{
  "status": "OK",
  "statusCode": 200,
  "data": {
    "devices": []
  },
  "meta": {}
}
"#
    .trim();
}
